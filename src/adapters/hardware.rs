//! Hardware adapter — bridges real peripherals to the domain port traits.
//!
//! Owns the MQ-3 sensor and the relay driver, exposing them through
//! [`SensorPort`] and [`ActuatorPort`]. This is the only module in the
//! system that couples the two; on non-espidf targets the underlying
//! drivers use cfg-gated simulation stubs.

use embedded_hal::digital::PinState;

use crate::app::decision::{Decision, GasSample};
use crate::app::ports::{ActuatorPort, SensorPort};
use crate::drivers::relay::RelayDriver;
use crate::sensors::alcohol::Mq3Sensor;

/// Concrete adapter that combines all hardware behind the port traits.
pub struct HardwareAdapter {
    sensor: Mq3Sensor,
    relay: RelayDriver,
}

impl HardwareAdapter {
    pub fn new(sensor: Mq3Sensor, relay: RelayDriver) -> Self {
        Self { sensor, relay }
    }
}

// ── SensorPort implementation ─────────────────────────────────

impl SensorPort for HardwareAdapter {
    fn sample(&mut self) -> GasSample {
        let reading = self.sensor.read();
        GasSample {
            raw: reading.raw,
            volts: reading.volts,
        }
    }
}

// ── ActuatorPort implementation ───────────────────────────────

impl ActuatorPort for HardwareAdapter {
    fn apply(&mut self, decision: Decision) {
        self.relay.apply(decision);
    }

    fn release(&mut self) {
        self.relay.release();
    }

    fn relay_level(&self) -> PinState {
        self.relay.level()
    }
}
