//! NTC thermistor sensor adapter
//!
//! This adapter implements the SensorPort trait for a thermistor divider
//! sampled through any [`AdcPort`].

use crate::domain::{CalibrationProfile, ChannelId, ReadingCondition, SensorReading};
use crate::ports::adc::AdcPort;
use crate::ports::sensor::SensorPort;

/// NTC thermistor on one ADC input
///
/// Every read performs exactly one conversion on the configured channel
/// and runs it through the calibration profile.
pub struct NtcSensor<A> {
    /// Converter the thermistor divider is wired to
    adc: A,
    /// Calibration parameters, fixed for the sensor's lifetime
    profile: CalibrationProfile,
    /// Last raw ADC value (for diagnostics)
    last_raw: Option<u16>,
}

impl<A: AdcPort> NtcSensor<A> {
    /// Create a new thermistor sensor
    ///
    /// # Arguments
    ///
    /// * `adc` - Converter to sample
    /// * `channel` - Input the divider is wired to
    /// * `reference_resistance` - Fixed divider resistor, Ohms
    /// * `r25` - Thermistor resistance at 25°C, Ohms
    /// * `a1`, `b1`, `c1`, `d1` - Steinhart-Hart coefficients
    ///
    /// Values are taken as given; see [`CalibrationProfile::try_new`]
    /// for a checked profile.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        adc: A,
        channel: ChannelId,
        reference_resistance: f64,
        r25: f64,
        a1: f64,
        b1: f64,
        c1: f64,
        d1: f64,
    ) -> Self {
        let profile = CalibrationProfile::new(channel, reference_resistance, r25, a1, b1, c1, d1);
        Self::with_profile(adc, profile)
    }

    /// Create with an existing calibration profile
    pub fn with_profile(adc: A, profile: CalibrationProfile) -> Self {
        Self {
            adc,
            profile,
            last_raw: None,
        }
    }

    /// Get the calibration profile
    pub fn profile(&self) -> &CalibrationProfile {
        &self.profile
    }

    /// Give the converter back
    pub fn release(self) -> A {
        self.adc
    }
}

impl<A: AdcPort> SensorPort for NtcSensor<A> {
    fn read(&mut self) -> SensorReading {
        let channel = self.profile.channel;
        let raw = self.adc.read_raw(channel);
        self.last_raw = Some(raw);

        let temperature = self.profile.adc_to_celsius(raw);
        let reading = SensorReading::new(raw, temperature, channel);

        match reading.condition() {
            ReadingCondition::OpenCircuit => {
                warn!("ntc ch{}: open circuit (raw {})", channel.value(), raw)
            }
            ReadingCondition::ShortCircuit => {
                warn!("ntc ch{}: short circuit (raw {})", channel.value(), raw)
            }
            ReadingCondition::Nominal => {
                trace!("ntc ch{}: raw {} -> {} C", channel.value(), raw, temperature)
            }
        }

        reading
    }

    fn channel(&self) -> ChannelId {
        self.profile.channel
    }

    fn last_raw_value(&self) -> Option<u16> {
        self.last_raw
    }
}
