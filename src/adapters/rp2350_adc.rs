//! RP2350 ADC adapter
//!
//! This adapter implements the AdcPort trait for the RP2350's SAR ADC
//! via embassy-rp, in blocking mode.

use crate::domain::{ChannelId, ADC_FULL_SCALE};
use crate::ports::adc::AdcPort;
use embassy_rp::adc::{Adc, Blocking, Channel as AdcChannel};
use heapless::Vec;

/// Number of inputs the adapter can hold (ADC0..ADC3 on RP2350A)
pub const MAX_CHANNELS: usize = 4;

/// RP2350 converter scaled down to 10-bit codes
///
/// Channels are registered in order, so the first channel added answers
/// to `ChannelId(0)`, the second to `ChannelId(1)` and so on.
pub struct Rp2350Adc<'a> {
    /// ADC peripheral (blocking mode to avoid DMA conflicts with flash)
    adc: Adc<'a, Blocking>,
    /// Configured inputs, indexed by ChannelId
    channels: Vec<AdcChannel<'a>, MAX_CHANNELS>,
}

impl<'a> Rp2350Adc<'a> {
    /// Create a new adapter with no channels
    pub fn new(adc: Adc<'a, Blocking>) -> Self {
        Self {
            adc,
            channels: Vec::new(),
        }
    }

    /// Register an input, returning the ID to sample it with
    ///
    /// Hands the channel back if all slots are taken.
    pub fn add_channel(&mut self, channel: AdcChannel<'a>) -> Result<ChannelId, AdcChannel<'a>> {
        let id = ChannelId::new(self.channels.len() as u8);
        self.channels.push(channel)?;
        debug!("rp2350 adc: channel {} registered", id.value());
        Ok(id)
    }
}

impl<'a> AdcPort for Rp2350Adc<'a> {
    /// Unknown channels and conversion errors read as full scale,
    /// which the sensor reports as an open circuit.
    fn read_raw(&mut self, channel: ChannelId) -> u16 {
        let Some(input) = self.channels.get_mut(usize::from(channel.value())) else {
            warn!("rp2350 adc: channel {} not configured", channel.value());
            return ADC_FULL_SCALE;
        };

        match self.adc.blocking_read(input) {
            // 12-bit sample, keep the top 10 bits
            Ok(sample) => (sample >> 2).min(ADC_FULL_SCALE),
            Err(e) => {
                warn!("rp2350 adc: conversion failed on channel {}: {}", channel.value(), e);
                ADC_FULL_SCALE
            }
        }
    }
}
