//! MQ-3 alcohol gas sensor driver.
//!
//! Reads the analog voltage output through an ADC channel and derives
//! the sensor voltage from the raw count. No calibration, no averaging —
//! each read stands alone.
//!
//! The reading convention throughout the system is 10-bit (0..=1023).
//! The hardware ADC samples at 12 bits, so the native count is rescaled
//! before it leaves this module.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: reads ADC1 via the oneshot API (initialised by `hw`).
//! On host/test: reads from a static `AtomicU16` for injection, already
//! in the 10-bit convention.

use core::sync::atomic::{AtomicU16, Ordering};

#[cfg(target_os = "espidf")]
use crate::drivers::hw;
#[cfg(target_os = "espidf")]
use crate::pins;

#[cfg_attr(target_os = "espidf", allow(dead_code))]
static SIM_MQ3_ADC: AtomicU16 = AtomicU16::new(0);

/// Full-scale count of the hardware ADC (12-bit oneshot reads).
#[cfg_attr(not(target_os = "espidf"), allow(dead_code))]
const ADC_NATIVE_MAX: u16 = 4095;

/// Rescale a native 12-bit ADC count to the 10-bit reading convention.
/// Keeps the reading proportional to the sensed voltage over the whole
/// range instead of saturating above quarter scale.
#[cfg_attr(not(target_os = "espidf"), allow(dead_code))]
fn scale_native_count(raw12: u16) -> u16 {
    raw12.min(ADC_NATIVE_MAX) >> 2
}

/// Inject a raw ADC value for the next reads (simulation / tests).
#[cfg(not(target_os = "espidf"))]
pub fn sim_set_mq3_adc(raw: u16) {
    SIM_MQ3_ADC.store(raw, Ordering::Relaxed);
}

/// One raw read from the MQ-3.
#[derive(Debug, Clone, Copy)]
pub struct Mq3Reading {
    /// Raw ADC count, clamped to the full-scale count.
    pub raw: u16,
    /// Derived voltage: `raw / max * vref`.
    pub volts: f32,
}

/// MQ-3 driver. Owns the ADC scale so every reading carries its voltage.
pub struct Mq3Sensor {
    adc_max: u16,
    vref_volts: f32,
    _adc_gpio: i32,
}

impl Mq3Sensor {
    pub fn new(adc_gpio: i32, adc_max: u16, vref_volts: f32) -> Self {
        Self {
            adc_max,
            vref_volts,
            _adc_gpio: adc_gpio,
        }
    }

    /// Take one sample. Never fails: an ADC error reads as 0 (handled in
    /// the hardware layer) and out-of-range counts clamp to full scale.
    pub fn read(&mut self) -> Mq3Reading {
        let raw = self.read_adc().min(self.adc_max);
        Mq3Reading {
            raw,
            volts: self.to_volts(raw),
        }
    }

    #[cfg(target_os = "espidf")]
    fn read_adc(&self) -> u16 {
        scale_native_count(hw::adc1_read(pins::MQ3_ADC_CHANNEL))
    }

    #[cfg(not(target_os = "espidf"))]
    fn read_adc(&self) -> u16 {
        SIM_MQ3_ADC.load(Ordering::Relaxed)
    }

    fn to_volts(&self, raw: u16) -> f32 {
        if self.adc_max == 0 {
            return 0.0;
        }
        f32::from(raw) / f32::from(self.adc_max) * self.vref_volts
    }
}
