//! Sensor reading domain entity
//!
//! A reading pairs the raw ADC code with the temperature derived from it.
//! It has no knowledge of how the code was sampled.

use super::calibration::ADC_FULL_SCALE;

/// ADC input identifier
///
/// Uses a single byte to name the converter input a sensor samples.
/// Whether the input is actually configured is up to the caller.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ChannelId(pub u8);

impl ChannelId {
    /// First analog input (A0 on most boards)
    pub const A0: ChannelId = ChannelId(0);

    /// Create a new channel ID from a raw value
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw ID value
    pub const fn value(&self) -> u8 {
        self.0
    }
}

/// What the raw code says about the divider circuit
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ReadingCondition {
    /// Code at full scale: thermistor open (or disconnected), +inf
    OpenCircuit,
    /// Code at zero: thermistor shorted to ground, -inf
    ShortCircuit,
    /// Anything in between
    Nominal,
}

impl ReadingCondition {
    /// Classify a raw 10-bit code
    pub const fn from_raw(raw: u16) -> Self {
        match raw {
            ADC_FULL_SCALE => Self::OpenCircuit,
            0 => Self::ShortCircuit,
            _ => Self::Nominal,
        }
    }
}

/// A single thermistor measurement
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SensorReading {
    /// Raw ADC code the temperature was computed from
    pub raw: u16,
    /// Temperature in Celsius, infinite at the rails
    pub temperature_c: f64,
    /// Input the code was sampled on
    pub channel: ChannelId,
}

impl SensorReading {
    pub const fn new(raw: u16, temperature_c: f64, channel: ChannelId) -> Self {
        Self {
            raw,
            temperature_c,
            channel,
        }
    }

    /// Classify the raw code of this reading
    pub const fn condition(&self) -> ReadingCondition {
        ReadingCondition::from_raw(self.raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_condition_at_rails() {
        assert_eq!(ReadingCondition::from_raw(0), ReadingCondition::ShortCircuit);
        assert_eq!(ReadingCondition::from_raw(1), ReadingCondition::Nominal);
        assert_eq!(ReadingCondition::from_raw(1022), ReadingCondition::Nominal);
        assert_eq!(ReadingCondition::from_raw(1023), ReadingCondition::OpenCircuit);
    }

    #[test]
    fn test_reading_condition() {
        let reading = SensorReading::new(1023, f64::INFINITY, ChannelId::A0);
        assert_eq!(reading.condition(), ReadingCondition::OpenCircuit);
        assert_eq!(reading.channel.value(), 0);
    }
}
