//! Application service — the hexagonal core.
//!
//! [`AppService`] owns the per-iteration orchestration: sample → decide →
//! actuate → report. All I/O flows through port traits injected at call
//! sites, making the entire service testable with mock adapters.
//!
//! ```text
//!  SensorPort ──▶ ┌────────────────────────┐ ──▶ EventSink
//!                 │       AppService        │
//! ActuatorPort ◀──│   threshold decision    │
//!                 └────────────────────────┘
//! ```

use log::{info, warn};

use crate::config::SystemConfig;

use super::commands::AppCommand;
use super::decision::{Decision, decide};
use super::events::{AppEvent, StatusReport};
use super::ports::{ActuatorPort, EventSink, SensorPort};

/// The application service orchestrates the control loop body.
pub struct AppService {
    config: SystemConfig,
    tick_count: u64,
    last_decision: Option<Decision>,
    last_status: Option<StatusReport>,
}

impl AppService {
    /// Construct the service from configuration.
    ///
    /// Does **not** touch hardware — call [`start`](Self::start) next.
    pub fn new(config: SystemConfig) -> Self {
        Self {
            config,
            tick_count: 0,
            last_decision: None,
            last_status: None,
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Initialise the actuation path: force the relay to its inactive
    /// level before any sample is taken. The caller is responsible for
    /// the settle delay that follows.
    pub fn start(&mut self, hw: &mut impl ActuatorPort, sink: &mut impl EventSink) {
        hw.release();
        sink.emit(&AppEvent::Started);
        info!(
            "AppService started: threshold={} raw, loop={}ms",
            self.config.alarm_threshold_raw, self.config.loop_interval_ms
        );
    }

    // ── Per-tick orchestration ────────────────────────────────

    /// Run one full control cycle: sample → decide → actuate → report.
    ///
    /// The `hw` parameter satisfies **both** [`SensorPort`] and
    /// [`ActuatorPort`] — this avoids a double mutable borrow while
    /// keeping the port boundary explicit.
    pub fn tick(
        &mut self,
        hw: &mut (impl SensorPort + ActuatorPort),
        sink: &mut impl EventSink,
        uptime_secs: u64,
    ) -> Decision {
        self.tick_count += 1;

        // 1. Sample via SensorPort — the reading lives only this iteration
        let sample = hw.sample();

        // 2. Pure threshold decision
        let decision = decide(sample.raw, self.config.alarm_threshold_raw);

        // 3. Actuate via ActuatorPort (idempotent)
        hw.apply(decision);

        // 4. Report via EventSink (fire-and-forget)
        let report = StatusReport {
            tick: self.tick_count,
            uptime_secs,
            raw: sample.raw,
            volts: sample.volts,
            decision,
        };
        sink.emit(&AppEvent::Status(report));
        self.last_status = Some(report);

        if let Some(prev) = self.last_decision {
            if prev != decision {
                sink.emit(&AppEvent::DecisionChanged {
                    from: prev,
                    to: decision,
                });
            }
        }
        self.last_decision = Some(decision);

        decision
    }

    // ── Command handling ──────────────────────────────────────

    /// Process a manual override. The override holds only until the next
    /// [`tick`](Self::tick), which re-derives the relay state from the
    /// current reading.
    pub fn handle_command(
        &mut self,
        cmd: AppCommand,
        hw: &mut impl ActuatorPort,
        sink: &mut impl EventSink,
    ) {
        match cmd {
            AppCommand::Lock => {
                warn!("Manual override: engaging relay");
                hw.apply(Decision::Alarm);
                sink.emit(&AppEvent::ManualOverride { engaged: true });
            }
            AppCommand::Unlock => {
                info!("Manual override: releasing relay");
                hw.release();
                sink.emit(&AppEvent::ManualOverride { engaged: false });
            }
        }
    }

    // ── Queries ───────────────────────────────────────────────

    /// Total control ticks executed since startup.
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// Classification from the most recent tick, if any.
    pub fn last_decision(&self) -> Option<Decision> {
        self.last_decision
    }

    /// Status report from the most recent tick, if any. Published to
    /// the control API after each cycle.
    pub fn last_status(&self) -> Option<StatusReport> {
        self.last_status
    }
}
