//! Relay driver (ignition interlock coil).
//!
//! Active-low convention: driving the line LOW energises the relay
//! (ignition locked / alarm indicator on); HIGH releases it. The driver
//! holds the line at the inactive level from construction, so the relay
//! can never chatter during boot.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: drives the real GPIO via `hw::gpio_write`.
//! On host/test: tracks the line level in-memory only.

use embedded_hal::digital::PinState;
use log::warn;

use crate::app::decision::Decision;
use crate::drivers::hw;

pub struct RelayDriver {
    gpio: i32,
    level: PinState,
}

impl RelayDriver {
    /// Construct the driver and force the inactive level (HIGH).
    pub fn new(gpio: i32) -> Self {
        let mut relay = Self {
            gpio,
            level: PinState::High,
        };
        relay.set_level(PinState::High);
        relay
    }

    /// Drive the line from a decision: `Alarm` → LOW, `Safe` → HIGH.
    /// Re-applying the same decision leaves the level unchanged.
    pub fn apply(&mut self, decision: Decision) {
        let level = match decision {
            Decision::Alarm => PinState::Low,
            Decision::Safe => PinState::High,
        };
        self.set_level(level);
    }

    /// Force the inactive level (HIGH).
    pub fn release(&mut self) {
        if self.is_engaged() {
            warn!("relay: forced release");
        }
        self.set_level(PinState::High);
    }

    /// Current line level.
    pub fn level(&self) -> PinState {
        self.level
    }

    /// True if the relay coil is energised (line LOW).
    pub fn is_engaged(&self) -> bool {
        self.level == PinState::Low
    }

    fn set_level(&mut self, level: PinState) {
        hw::gpio_write(self.gpio, level);
        self.level = level;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_inactive_level() {
        let relay = RelayDriver::new(8);
        assert_eq!(relay.level(), PinState::High);
        assert!(!relay.is_engaged());
    }

    #[test]
    fn decision_maps_to_active_low() {
        let mut relay = RelayDriver::new(8);
        relay.apply(Decision::Alarm);
        assert_eq!(relay.level(), PinState::Low);
        assert!(relay.is_engaged());

        relay.apply(Decision::Safe);
        assert_eq!(relay.level(), PinState::High);
        assert!(!relay.is_engaged());
    }

    #[test]
    fn reapplying_same_decision_is_idempotent() {
        let mut relay = RelayDriver::new(8);
        relay.apply(Decision::Alarm);
        let before = relay.level();
        relay.apply(Decision::Alarm);
        assert_eq!(relay.level(), before);
    }

    #[test]
    fn release_forces_inactive_from_any_state() {
        let mut relay = RelayDriver::new(8);
        relay.apply(Decision::Alarm);
        relay.release();
        assert_eq!(relay.level(), PinState::High);
        relay.release();
        assert_eq!(relay.level(), PinState::High);
    }
}
