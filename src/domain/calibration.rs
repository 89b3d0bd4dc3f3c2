//! NTC thermistor calibration domain service
//!
//! This module converts raw 10-bit ADC codes taken across a voltage
//! divider into temperature in Celsius, using the Steinhart-Hart
//! logarithmic polynomial.
//!
//! ```text
//!  AREF ---+
//!          |
//!         [R_ref]
//!          |
//!          +------ ADC input
//!          |
//!         [NTC]
//!          |
//!  GND ----+
//! ```
//!
//! `1/T = A1 + B1·x + C1·x² + D1·x³` with `x = ln(R_ntc / R25)`, T in Kelvin.

use core::fmt;

use super::reading::ChannelId;

/// Highest code of a 10-bit single-ended converter
pub const ADC_FULL_SCALE: u16 = 1023;

/// Offset between Kelvin and Celsius
pub const KELVIN_OFFSET: f64 = 273.15;

/// Which power of `x` the D1 coefficient multiplies
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PolynomialForm {
    /// Textbook Steinhart-Hart: `A1 + B1·x + C1·x² + D1·x³`
    #[default]
    Cubic,
    /// Squares the running power twice, so D1 multiplies `x⁴`.
    ///
    /// Kept for parity with deployed firmware that evaluates the
    /// polynomial this way. Identical to `Cubic` at `x = 0`.
    LegacyQuartic,
}

/// Steinhart-Hart polynomial coefficients
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SteinhartHart {
    pub a1: f64,
    pub b1: f64,
    pub c1: f64,
    pub d1: f64,
}

impl SteinhartHart {
    pub const fn new(a1: f64, b1: f64, c1: f64, d1: f64) -> Self {
        Self { a1, b1, c1, d1 }
    }

    fn is_finite(&self) -> bool {
        self.a1.is_finite() && self.b1.is_finite() && self.c1.is_finite() && self.d1.is_finite()
    }
}

/// Rejected calibration input
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CalibrationError {
    /// Reference resistor is zero, negative or not finite
    InvalidReferenceResistance,
    /// R25 is zero, negative or not finite
    InvalidR25,
    /// One of A1..D1 is NaN or infinite
    NonFiniteCoefficient,
}

impl fmt::Display for CalibrationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidReferenceResistance => {
                f.write_str("reference resistance must be positive and finite")
            }
            Self::InvalidR25 => f.write_str("R25 must be positive and finite"),
            Self::NonFiniteCoefficient => f.write_str("Steinhart-Hart coefficients must be finite"),
        }
    }
}

/// Calibration of one thermistor divider
///
/// Immutable once built. Nothing is validated by [`CalibrationProfile::new`];
/// nonsensical values propagate through the math as IEEE-754 results.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CalibrationProfile {
    /// ADC input the thermistor is wired to
    pub channel: ChannelId,
    /// Fixed resistor between AREF and the ADC input, Ohms
    pub reference_resistance: f64,
    /// Thermistor resistance at 25°C, Ohms
    pub r25: f64,
    pub coefficients: SteinhartHart,
    pub form: PolynomialForm,
}

impl CalibrationProfile {
    /// 4.7k divider with a 4.7k NTC on A0
    pub const REFERENCE_4K7: Self = Self::new(
        ChannelId::A0,
        4700.0,
        4700.0,
        3.354016e-3,
        2.569355e-4,
        2.626311e-6,
        0.675278e-7,
    );

    /// Create a profile without any checks
    pub const fn new(
        channel: ChannelId,
        reference_resistance: f64,
        r25: f64,
        a1: f64,
        b1: f64,
        c1: f64,
        d1: f64,
    ) -> Self {
        Self {
            channel,
            reference_resistance,
            r25,
            coefficients: SteinhartHart::new(a1, b1, c1, d1),
            form: PolynomialForm::Cubic,
        }
    }

    /// Create a profile, rejecting values that cannot describe a real divider
    pub fn try_new(
        channel: ChannelId,
        reference_resistance: f64,
        r25: f64,
        a1: f64,
        b1: f64,
        c1: f64,
        d1: f64,
    ) -> Result<Self, CalibrationError> {
        let profile = Self::new(channel, reference_resistance, r25, a1, b1, c1, d1);
        profile.validate()?;
        Ok(profile)
    }

    /// Check the physical constraints on this profile
    pub fn validate(&self) -> Result<(), CalibrationError> {
        if !positive_finite(self.reference_resistance) {
            return Err(CalibrationError::InvalidReferenceResistance);
        }
        if !positive_finite(self.r25) {
            return Err(CalibrationError::InvalidR25);
        }
        if !self.coefficients.is_finite() {
            return Err(CalibrationError::NonFiniteCoefficient);
        }
        Ok(())
    }

    /// Same profile evaluated with a different polynomial form
    pub const fn with_form(mut self, form: PolynomialForm) -> Self {
        self.form = form;
        self
    }

    /// Thermistor resistance for a raw code, from the divider relation
    ///
    /// Infinite at full scale, zero at code 0.
    #[inline]
    pub fn divider_resistance(&self, adc: u16) -> f64 {
        let adc = f64::from(adc);
        self.reference_resistance * adc / (f64::from(ADC_FULL_SCALE) - adc)
    }

    /// Evaluate the polynomial at `x = ln(R / R25)`, giving 1/T in 1/K
    pub fn inverse_kelvin(&self, x: f64) -> f64 {
        let SteinhartHart { a1, b1, c1, d1 } = self.coefficients;

        let mut result = a1;
        result += b1 * x;
        let x2 = x * x;
        result += c1 * x2;
        match self.form {
            PolynomialForm::Cubic => result += d1 * (x2 * x),
            PolynomialForm::LegacyQuartic => result += d1 * (x2 * x2),
        }
        result
    }

    /// Convert a raw code to Celsius
    ///
    /// Full scale maps to `+inf` (open thermistor), zero to `-inf`
    /// (shorted thermistor). Everything else goes through the formula
    /// unguarded, so a degenerate profile yields NaN or infinities.
    pub fn adc_to_celsius(&self, adc: u16) -> f64 {
        match adc {
            ADC_FULL_SCALE => f64::INFINITY,
            0 => f64::NEG_INFINITY,
            _ => {
                let resistance = self.divider_resistance(adc);
                let x = libm::log(resistance / self.r25);
                1.0 / self.inverse_kelvin(x) - KELVIN_OFFSET
            }
        }
    }
}

fn positive_finite(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

impl Default for CalibrationProfile {
    fn default() -> Self {
        Self::REFERENCE_4K7
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const REF: CalibrationProfile = CalibrationProfile::REFERENCE_4K7;

    #[test]
    fn test_rails_are_infinite() {
        assert_eq!(REF.adc_to_celsius(1023), f64::INFINITY);
        assert_eq!(REF.adc_to_celsius(0), f64::NEG_INFINITY);

        let other = CalibrationProfile::new(ChannelId(3), 10_000.0, 10_000.0, 1e-3, 2e-4, 0.0, 0.0);
        assert_eq!(other.adc_to_celsius(1023), f64::INFINITY);
        assert_eq!(other.adc_to_celsius(0), f64::NEG_INFINITY);
    }

    #[test]
    fn test_rails_are_discontinuous() {
        // Neighbouring codes stay finite; only the rail codes jump
        let near_top = REF.adc_to_celsius(1022);
        let near_bottom = REF.adc_to_celsius(1);
        assert!(near_top.is_finite());
        assert!(near_bottom.is_finite());
        assert!(near_top < 0.0);
        assert!(near_bottom > 100.0);
    }

    #[test]
    fn test_midscale_is_room_temperature() {
        let temp = REF.adc_to_celsius(512);
        assert!((temp - 25.0).abs() < 0.05, "got {temp}");

        let a1_only = 1.0 / REF.coefficients.a1 - KELVIN_OFFSET;
        assert!((temp - a1_only).abs() < 0.05);
    }

    #[test]
    fn test_monotonic_over_open_range() {
        let mut previous = REF.adc_to_celsius(1);
        for adc in 2..=1022 {
            let temp = REF.adc_to_celsius(adc);
            assert!(temp <= previous, "adc {adc}: {temp} > {previous}");
            previous = temp;
        }
    }

    #[test]
    fn test_divider_resistance_positive() {
        for adc in 1..ADC_FULL_SCALE {
            let r = REF.divider_resistance(adc);
            assert!(r > 0.0 && r.is_finite(), "adc {adc}: {r}");
        }
        assert_eq!(REF.divider_resistance(0), 0.0);
        assert_eq!(REF.divider_resistance(1023), f64::INFINITY);
    }

    #[test]
    fn test_divider_resistance_values() {
        // 4700 * 1 / 1022
        assert!((REF.divider_resistance(1) - 4.598_825_831_7).abs() < 1e-6);
        assert_eq!(REF.divider_resistance(1022), 4_803_400.0);
    }

    // D1 multiplies x³ in the textbook equation but x⁴ in the legacy
    // evaluation. Both are supported; these pin down where they agree.
    #[test]
    fn test_polynomial_forms_agree_at_r25() {
        let legacy = REF.with_form(PolynomialForm::LegacyQuartic);
        assert_eq!(REF.inverse_kelvin(0.0), REF.coefficients.a1);
        assert_eq!(legacy.inverse_kelvin(0.0), REF.coefficients.a1);
    }

    #[test]
    fn test_polynomial_forms_diverge_off_r25() {
        let legacy = REF.with_form(PolynomialForm::LegacyQuartic);

        let x = 2.0_f64;
        let SteinhartHart { a1, b1, c1, d1 } = REF.coefficients;
        let cubic_expected = a1 + b1 * x + c1 * x * x + d1 * x * x * x;
        let quartic_expected = a1 + b1 * x + c1 * x * x + d1 * x * x * x * x;
        assert!((REF.inverse_kelvin(x) - cubic_expected).abs() < 1e-15);
        assert!((legacy.inverse_kelvin(x) - quartic_expected).abs() < 1e-15);

        let cubic = REF.adc_to_celsius(100);
        let quartic = legacy.adc_to_celsius(100);
        assert!((cubic - 84.60).abs() < 0.01, "cubic {cubic}");
        assert!((quartic - 84.30).abs() < 0.01, "quartic {quartic}");
    }

    #[test]
    fn test_legacy_form_monotonic() {
        let legacy = REF.with_form(PolynomialForm::LegacyQuartic);
        let mut previous = legacy.adc_to_celsius(1);
        for adc in 2..=1022 {
            let temp = legacy.adc_to_celsius(adc);
            assert!(temp <= previous);
            previous = temp;
        }
    }

    #[test]
    fn test_degenerate_profile_propagates_ieee() {
        // All-zero polynomial: 1/0 = inf
        let zero = CalibrationProfile::new(ChannelId::A0, 4700.0, 4700.0, 0.0, 0.0, 0.0, 0.0);
        assert_eq!(zero.adc_to_celsius(512), f64::INFINITY);

        // Negative reference resistor: ln of a negative ratio is NaN
        let negative = CalibrationProfile::new(ChannelId::A0, -4700.0, 4700.0, 3.3e-3, 2.5e-4, 0.0, 0.0);
        assert!(negative.adc_to_celsius(512).is_nan());

        // Codes past full scale are not clamped
        assert!(REF.adc_to_celsius(2000).is_nan());
    }

    #[test]
    fn test_try_new_accepts_reference() {
        let profile =
            CalibrationProfile::try_new(ChannelId::A0, 4700.0, 4700.0, 3.354016e-3, 2.569355e-4, 2.626311e-6, 0.675278e-7)
                .unwrap();
        assert_eq!(profile, REF);
    }

    #[test]
    fn test_try_new_rejects_invalid() {
        let c = ChannelId::A0;
        assert_eq!(
            CalibrationProfile::try_new(c, 0.0, 4700.0, 1e-3, 0.0, 0.0, 0.0),
            Err(CalibrationError::InvalidReferenceResistance)
        );
        assert_eq!(
            CalibrationProfile::try_new(c, f64::NAN, 4700.0, 1e-3, 0.0, 0.0, 0.0),
            Err(CalibrationError::InvalidReferenceResistance)
        );
        assert_eq!(
            CalibrationProfile::try_new(c, 4700.0, -1.0, 1e-3, 0.0, 0.0, 0.0),
            Err(CalibrationError::InvalidR25)
        );
        assert_eq!(
            CalibrationProfile::try_new(c, 4700.0, f64::INFINITY, 1e-3, 0.0, 0.0, 0.0),
            Err(CalibrationError::InvalidR25)
        );
        assert_eq!(
            CalibrationProfile::try_new(c, 4700.0, 4700.0, 1e-3, f64::NAN, 0.0, 0.0),
            Err(CalibrationError::NonFiniteCoefficient)
        );
    }

    #[test]
    fn test_default_is_cubic_reference() {
        let profile = CalibrationProfile::default();
        assert_eq!(profile.form, PolynomialForm::Cubic);
        assert_eq!(profile.channel, ChannelId::A0);
    }
}
