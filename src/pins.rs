//! GPIO / peripheral pin assignments for the BreathaLock main board.
//!
//! Single source of truth — every driver references this module rather than
//! hard-coding pin numbers.

// ---------------------------------------------------------------------------
// MQ-3 alcohol sensor — analog output via resistive divider
// ---------------------------------------------------------------------------

/// MQ-3 analog output. ADC1 channel 0 (GPIO 1 on ESP32-S3) — the board's
/// "A0" position.
pub const MQ3_ADC_GPIO: i32 = 1;
/// ADC1 channel number for the MQ-3 input.
pub const MQ3_ADC_CHANNEL: u32 = 0;

// ---------------------------------------------------------------------------
// Relay (ignition interlock)
// ---------------------------------------------------------------------------

/// Relay coil driver. Active-low: LOW energises the relay (ignition
/// locked / alarm indicator on), HIGH releases it.
pub const RELAY_GPIO: i32 = 8;
