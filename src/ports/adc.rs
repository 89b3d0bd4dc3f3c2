//! ADC port - abstraction over the analog-to-digital converter
//!
//! The thermistor math never touches hardware directly. Anything that can
//! produce a 10-bit code for a channel (embassy-rp, a mock, an external
//! converter on I2C) plugs in here.

use crate::domain::ChannelId;

/// Port for sampling an analog input
///
/// # Example Implementation
///
/// ```ignore
/// struct ExternalAdc<I2C> {
///     i2c: I2C,
/// }
///
/// impl<I2C: I2c> AdcPort for ExternalAdc<I2C> {
///     fn read_raw(&mut self, channel: ChannelId) -> u16 {
///         let mut buf = [0u8; 2];
///         self.i2c.write_read(ADDR, &[channel.value()], &mut buf).ok();
///         u16::from_be_bytes(buf) >> 6
///     }
/// }
/// ```
pub trait AdcPort {
    /// Perform one blocking conversion on `channel`
    ///
    /// Returns a 10-bit single-ended code in `0..=1023`. The call blocks
    /// until the conversion completes. If several sensors share one
    /// physical input, serializing access is up to the implementation.
    fn read_raw(&mut self, channel: ChannelId) -> u16;
}

impl<A: AdcPort + ?Sized> AdcPort for &mut A {
    fn read_raw(&mut self, channel: ChannelId) -> u16 {
        (**self).read_raw(channel)
    }
}
