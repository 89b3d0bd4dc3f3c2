//! Adapters - concrete implementations of ports
//!
//! # Available Adapters
//!
//! - **ntc**: NTC thermistor divider on any AdcPort
//! - **mock**: scripted ADC for host tests and bring-up
//! - **rp2350_adc**: RP2350 SAR ADC via embassy-rp (`rp2350` feature)

pub mod mock;
pub mod ntc;
#[cfg(feature = "rp2350")]
pub mod rp2350_adc;

pub use mock::MockAdc;
pub use ntc::NtcSensor;
#[cfg(feature = "rp2350")]
pub use rp2350_adc::Rp2350Adc;
