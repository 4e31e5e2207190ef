//! System configuration parameters.
//!
//! All tunable parameters for the interlock. There is no external
//! configuration surface (no CLI, no config file, no environment
//! variables) — the defaults ARE the deployed values; the struct exists
//! so the rest of the system never hard-codes a constant inline.

use serde::{Deserialize, Serialize};

/// Core system configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemConfig {
    // --- Alarm threshold ---
    /// Raw ADC reading above which (strictly) the environment is
    /// classified as alarm state.
    pub alarm_threshold_raw: u16,

    // --- ADC scale ---
    /// Full-scale ADC count (10-bit convention).
    pub adc_max_count: u16,
    /// ADC reference voltage used to derive the reported voltage.
    pub adc_reference_volts: f32,

    // --- Timing ---
    /// Pause after relay/sensor init before the first sample (MQ-3
    /// heater and relay coil stabilisation).
    pub settle_delay_ms: u32,
    /// Per-iteration delay of the control loop.
    pub loop_interval_ms: u32,

    // --- Serial ---
    /// Console baud rate (informational — the console is initialised by
    /// the platform logger).
    pub serial_baud: u32,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            alarm_threshold_raw: 400,
            adc_max_count: 1023,
            adc_reference_volts: 5.0,
            settle_delay_ms: 2000,
            loop_interval_ms: 1000,
            serial_baud: 9600,
        }
    }
}
