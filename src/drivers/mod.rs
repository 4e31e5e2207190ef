//! Hardware drivers: one-shot peripheral init and the relay line.

pub mod hw;
pub mod relay;

pub use relay::RelayDriver;
