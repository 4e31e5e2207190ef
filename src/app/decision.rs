//! Threshold decision — the one piece of business logic in the system.
//!
//! A single raw ADC reading is classified against a fixed threshold.
//! No hysteresis, no debouncing, no memory of previous samples: a noisy
//! reading can flip the decision on every iteration, matching the
//! deployed behaviour of the original unit.

use serde::Serialize;

/// One sensor sample as seen by the domain: the raw ADC count and the
/// voltage derived from it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GasSample {
    /// Raw ADC reading, clamped to the configured full-scale count.
    pub raw: u16,
    /// `raw / adc_max * vref` — reported alongside the raw value.
    pub volts: f32,
}

/// Per-iteration classification of the environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Decision {
    /// Reading at or below the threshold — relay released.
    Safe,
    /// Reading strictly above the threshold — relay engaged.
    Alarm,
}

impl Decision {
    /// The fixed classification string written to the serial console.
    pub const fn classification(self) -> &'static str {
        match self {
            Self::Alarm => "ALCOHOL DETECTED",
            Self::Safe => "SAFE - No Alcohol",
        }
    }
}

/// Classify a raw reading. `Alarm` iff `raw > threshold` (strict).
pub fn decide(raw: u16, threshold: u16) -> Decision {
    if raw > threshold {
        Decision::Alarm
    } else {
        Decision::Safe
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_boundary_is_strict() {
        assert_eq!(decide(400, 400), Decision::Safe);
        assert_eq!(decide(401, 400), Decision::Alarm);
    }

    #[test]
    fn extremes_classify() {
        assert_eq!(decide(0, 400), Decision::Safe);
        assert_eq!(decide(1023, 400), Decision::Alarm);
    }

    #[test]
    fn classification_strings_are_fixed() {
        assert_eq!(Decision::Alarm.classification(), "ALCOHOL DETECTED");
        assert_eq!(Decision::Safe.classification(), "SAFE - No Alcohol");
    }
}
