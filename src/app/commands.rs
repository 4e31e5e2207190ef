//! Inbound commands to the application service.
//!
//! Manual overrides for bench demos: drive the relay without waiting for
//! a sensor reading. The override only holds until the next control tick,
//! which re-derives the relay state from the current sample.

/// Commands that external adapters can send into the application core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppCommand {
    /// Engage the relay (active LOW — ignition locked).
    Lock,

    /// Release the relay (inactive HIGH — ignition unlocked).
    Unlock,
}
