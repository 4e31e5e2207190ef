//! Adapters — concrete implementations of the port traits.

pub mod control_api;
pub mod hardware;
pub mod serial_sink;
pub mod time;

pub use control_api::ControlApi;
pub use hardware::HardwareAdapter;
pub use serial_sink::SerialStatusSink;
pub use time::Esp32TimeAdapter;
