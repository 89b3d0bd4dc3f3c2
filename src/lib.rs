//! NTC thermistor temperature sensing
//!
//! Converts 10-bit ADC codes from a thermistor voltage divider into
//! degrees Celsius with the Steinhart-Hart polynomial.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                     Domain Layer                                 │
//! │  - CalibrationProfile: divider + Steinhart-Hart math            │
//! │  - SensorReading entity                                          │
//! └─────────────────────────────────────────────────────────────────┘
//!                               │
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                     Ports (Traits)                               │
//! │  - AdcPort: sample a raw code                                   │
//! │  - SensorPort: read a temperature                               │
//! └─────────────────────────────────────────────────────────────────┘
//!                               │
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                     Adapters                                     │
//! │  - NtcSensor: thermistor on any AdcPort                         │
//! │  - MockAdc: scripted converter                                  │
//! │  - Rp2350Adc: embassy-rp blocking ADC                           │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```
//! use rp_ntc::{CalibrationProfile, MockAdc, NtcSensor, SensorPort};
//!
//! let mut sensor = NtcSensor::with_profile(MockAdc::fixed(512), CalibrationProfile::REFERENCE_4K7);
//! let temp = sensor.read_temperature_celsius();
//! assert!((temp - 25.0).abs() < 0.05);
//! ```
//!
//! Open and shorted thermistors read as `+inf` and `-inf`; nothing on the
//! reading path returns an error.

#![cfg_attr(not(test), no_std)]

// This mod MUST go first, so that the others see its macros.
pub(crate) mod fmt;

/// Domain layer - pure conversion logic
pub mod domain;

/// Ports - traits defining boundaries
pub mod ports;

/// Adapters - concrete implementations
pub mod adapters;

// Re-export key domain types
pub use domain::{
    CalibrationError, CalibrationProfile, ChannelId, PolynomialForm, ReadingCondition,
    SensorReading, SteinhartHart, ADC_FULL_SCALE, KELVIN_OFFSET,
};

// Re-export key port traits
pub use ports::{AdcPort, SensorPort};

// Re-export adapters
pub use adapters::{MockAdc, NtcSensor};
#[cfg(feature = "rp2350")]
pub use adapters::Rp2350Adc;
