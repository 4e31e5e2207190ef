//! Port traits — the hexagonal boundary between domain logic and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ AppService (domain)
//! ```
//!
//! Driven adapters (the MQ-3 sensor, the relay, the serial reporter)
//! implement these traits. The [`AppService`](super::service::AppService)
//! consumes them via generics, so the domain core never touches hardware
//! directly.
//!
//! Hardware I/O is modelled as infallible at this boundary: the analog
//! read and the GPIO write do not fail on this platform, and reporting
//! must never block the decision/actuation path.

use embedded_hal::digital::PinState;

use super::decision::{Decision, GasSample};
use super::events::AppEvent;

// ───────────────────────────────────────────────────────────────
// Sensor port (driven adapter: hardware → domain)
// ───────────────────────────────────────────────────────────────

/// Read-side port: the domain calls this once per iteration.
pub trait SensorPort {
    /// Take one sample from the gas sensor.
    fn sample(&mut self) -> GasSample;
}

// ───────────────────────────────────────────────────────────────
// Actuator port (driven adapter: domain → hardware)
// ───────────────────────────────────────────────────────────────

/// Write-side port: the domain calls this to command the relay.
pub trait ActuatorPort {
    /// Drive the relay line from a decision: `Alarm` → LOW (engaged),
    /// `Safe` → HIGH (released). Idempotent.
    fn apply(&mut self, decision: Decision);

    /// Force the inactive level (HIGH). Called once at startup before
    /// the first sample.
    fn release(&mut self);

    /// Current relay line level.
    fn relay_level(&self) -> PinState;
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → serial / telemetry)
// ───────────────────────────────────────────────────────────────

/// The domain emits structured [`AppEvent`]s through this port. Adapters
/// decide where they go (serial console in production, a `Vec` in tests).
pub trait EventSink {
    fn emit(&mut self, event: &AppEvent);
}
