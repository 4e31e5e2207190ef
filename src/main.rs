//! BreathaLock Firmware — Main Entry Point
//!
//! Hexagonal architecture around a flat polling loop:
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │                 Adapters (outer ring)                  │
//! │                                                        │
//! │  HardwareAdapter        SerialStatusSink               │
//! │  (Sensor+Actuator)      (EventSink)                    │
//! │  ControlApi                                            │
//! │  (status + overrides)                                  │
//! │                                                        │
//! │  ──────────── Port Trait Boundary ─────────────        │
//! │                                                        │
//! │  ┌──────────────────────────────────────────────┐      │
//! │  │          AppService (pure logic)             │      │
//! │  │  sample → decide → actuate → report          │      │
//! │  └──────────────────────────────────────────────┘      │
//! └────────────────────────────────────────────────────────┘
//! ```
//!
//! One decision per second, forever, until power-off.
#![deny(unused_must_use)]

use std::thread;
use std::time::Duration;

use anyhow::Result;
use embedded_hal::digital::PinState;
use log::info;

use breathalock::adapters::control_api::ControlApi;
use breathalock::adapters::hardware::HardwareAdapter;
use breathalock::adapters::serial_sink::SerialStatusSink;
use breathalock::adapters::time::Esp32TimeAdapter;
use breathalock::app::ports::ActuatorPort;
use breathalock::app::service::AppService;
use breathalock::config::SystemConfig;
use breathalock::drivers;
use breathalock::drivers::relay::RelayDriver;
use breathalock::pins;
use breathalock::sensors::alcohol::Mq3Sensor;

fn main() -> Result<()> {
    // ── 1. Platform bootstrap ─────────────────────────────────
    #[cfg(target_os = "espidf")]
    {
        esp_idf_svc::sys::link_patches();
        esp_idf_logger::init()?;
    }
    #[cfg(not(target_os = "espidf"))]
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .init();

    let config = SystemConfig::default();

    info!("╔══════════════════════════════════════╗");
    info!("║  BreathaLock v{:<23}║", env!("CARGO_PKG_VERSION"));
    info!("╚══════════════════════════════════════╝");
    info!("Alcohol interlock: threshold={} raw, console at {} baud", config.alarm_threshold_raw, config.serial_baud);

    // ── 2. Initialise hardware peripherals ────────────────────
    if let Err(e) = drivers::hw::init_peripherals() {
        // Peripheral init failure is critical — log and halt.
        // In production this triggers the watchdog reset after timeout.
        log::error!("HAL init failed: {} — halting", e);
        #[allow(clippy::empty_loop)]
        loop {}
    }

    // ── 3. Construct adapters ─────────────────────────────────
    let sensor = Mq3Sensor::new(
        pins::MQ3_ADC_GPIO,
        config.adc_max_count,
        config.adc_reference_volts,
    );
    let relay = RelayDriver::new(pins::RELAY_GPIO);
    let mut hw = HardwareAdapter::new(sensor, relay);
    let mut sink = SerialStatusSink::new();
    let clock = Esp32TimeAdapter::new();

    // Control API: served status + inbound lock/unlock overrides.
    let (api, commands) = ControlApi::new();
    #[cfg(target_os = "espidf")]
    let _http = match breathalock::adapters::control_api::serve(&api) {
        Ok(server) => Some(server),
        Err(e) => {
            log::warn!("control API unavailable ({}), continuing headless", e);
            None
        }
    };

    // ── 4. Construct app service ──────────────────────────────
    let mut app = AppService::new(config.clone());
    app.start(&mut hw, &mut sink);

    // Let the MQ-3 heater and the relay coil settle before sampling.
    thread::sleep(Duration::from_millis(u64::from(config.settle_delay_ms)));

    info!("System ready. Entering control loop.");

    // ── 5. Control loop ───────────────────────────────────────
    loop {
        // Manual overrides hold only until the tick below re-derives
        // the relay state from the current reading.
        while let Ok(cmd) = commands.try_recv() {
            app.handle_command(cmd, &mut hw, &mut sink);
            api.set_relay_active(hw.relay_level() == PinState::Low);
        }

        app.tick(&mut hw, &mut sink, clock.uptime_secs());
        if let Some(report) = app.last_status() {
            api.publish(&report, hw.relay_level() == PinState::Low);
        }

        thread::sleep(Duration::from_millis(u64::from(config.loop_interval_ms)));
    }
}
