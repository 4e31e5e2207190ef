//! Sensor subsystem.
//!
//! One sensor on this board: the MQ-3 alcohol sensor on ADC1.

pub mod alcohol;

pub use alcohol::Mq3Sensor;
