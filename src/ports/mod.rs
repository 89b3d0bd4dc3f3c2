//! Ports (interfaces) defining the boundaries of the crate
//!
//! - **AdcPort**: How raw codes are sampled (embassy-rp, mock)
//! - **SensorPort**: How the application reads temperatures

pub mod adc;
pub mod sensor;

pub use adc::AdcPort;
pub use sensor::SensorPort;
