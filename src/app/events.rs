//! Outbound application events.
//!
//! The [`AppService`](super::service::AppService) emits these through the
//! [`EventSink`](super::ports::EventSink) port. Adapters on the other
//! side decide what to do with them — in production the serial sink
//! writes the per-iteration status lines.

use serde::Serialize;

use super::decision::Decision;

/// Structured events emitted by the application core.
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// The control loop has started (relay forced inactive).
    Started,

    /// Per-iteration status: one of these per control tick.
    Status(StatusReport),

    /// The classification flipped between iterations.
    DecisionChanged { from: Decision, to: Decision },

    /// A manual override command drove the relay directly.
    /// `engaged` = relay at the active (LOW) level.
    ManualOverride { engaged: bool },
}

/// A point-in-time status snapshot suitable for logging or transmission.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct StatusReport {
    /// Control ticks executed since startup (1-based).
    pub tick: u64,
    /// Monotonic seconds since boot.
    pub uptime_secs: u64,
    /// Raw ADC reading for this iteration.
    pub raw: u16,
    /// Derived sensor voltage.
    pub volts: f32,
    /// Classification for this iteration.
    pub decision: Decision,
}
