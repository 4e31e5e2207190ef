//! Application core — hexagonal domain logic.
//!
//! Pure decision logic and orchestration; all I/O happens behind the
//! port traits in [`ports`].

pub mod commands;
pub mod decision;
pub mod events;
pub mod ports;
pub mod service;

pub use decision::{Decision, GasSample, decide};
pub use service::AppService;
