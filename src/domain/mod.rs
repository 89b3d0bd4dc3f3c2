//! Domain layer - pure conversion logic independent of hardware
//!
//! This module contains the calibration profile that turns raw ADC codes
//! into temperatures, and the reading entity produced by a sensor.

pub mod calibration;
pub mod reading;

pub use calibration::{
    CalibrationError, CalibrationProfile, PolynomialForm, SteinhartHart, ADC_FULL_SCALE,
    KELVIN_OFFSET,
};
pub use reading::{ChannelId, ReadingCondition, SensorReading};
