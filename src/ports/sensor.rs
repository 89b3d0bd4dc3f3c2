//! Sensor port - abstraction for reading temperatures
//!
//! This trait lets the application read a temperature without knowing
//! which sensor or conversion sits behind it.

use crate::domain::{ChannelId, SensorReading};

/// Port for reading temperature data
///
/// Reads never fail. Physical boundary conditions are reported through
/// the value itself: `+inf` for an open thermistor, `-inf` for a short.
///
/// # Example Implementation
///
/// ```ignore
/// impl<A: AdcPort> SensorPort for NtcSensor<A> {
///     fn read(&mut self) -> SensorReading {
///         let raw = self.adc.read_raw(self.profile.channel);
///         let temp = self.profile.adc_to_celsius(raw);
///         SensorReading::new(raw, temp, self.profile.channel)
///     }
///
///     fn channel(&self) -> ChannelId { self.profile.channel }
/// }
/// ```
pub trait SensorPort {
    /// Sample once and return the raw code with its temperature
    fn read(&mut self) -> SensorReading;

    /// Sample once and return only the temperature in Celsius
    fn read_temperature_celsius(&mut self) -> f64 {
        self.read().temperature_c
    }

    /// Get the ADC input this sensor samples
    fn channel(&self) -> ChannelId;

    /// Get the last raw ADC value (for diagnostics)
    ///
    /// Returns `None` before the first read or if the sensor doesn't
    /// expose raw values.
    fn last_raw_value(&self) -> Option<u16> {
        None
    }
}
