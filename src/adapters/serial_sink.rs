//! Serial status sink adapter.
//!
//! Implements [`EventSink`] by writing status lines to the platform
//! logger (UART / USB-CDC in production). Each `Status` event becomes
//! the two-line report the original unit printed: the raw reading with
//! its derived voltage, then the fixed classification string.

use core::fmt::Write as _;

use heapless::String;
use log::{info, warn};

use crate::app::events::{AppEvent, StatusReport};

/// Adapter that logs every [`AppEvent`] to the serial console.
pub struct SerialStatusSink;

impl SerialStatusSink {
    pub fn new() -> Self {
        Self
    }
}

/// Render the two per-iteration status lines. Shared with the test suite
/// so the wire text is asserted in exactly one place.
pub fn status_lines(report: &StatusReport) -> [String<64>; 2] {
    let mut first: String<64> = String::new();
    // 64 bytes always fits a u16 count and a fixed-width voltage.
    let _ = write!(
        first,
        "Sensor value: {} ({:.2} V)",
        report.raw, report.volts
    );

    let mut second: String<64> = String::new();
    let _ = second.push_str(report.decision.classification());

    [first, second]
}

impl crate::app::ports::EventSink for SerialStatusSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Started => {
                info!("START | relay released, monitoring MQ-3");
            }
            AppEvent::Status(report) => {
                let [value_line, class_line] = status_lines(report);
                info!("{}", value_line);
                info!("{}", class_line);
            }
            AppEvent::DecisionChanged { from, to } => {
                info!("STATE | {:?} -> {:?}", from, to);
            }
            AppEvent::ManualOverride { engaged } => {
                warn!(
                    "OVERRIDE | relay {}",
                    if *engaged { "engaged" } else { "released" }
                );
            }
        }
    }
}
