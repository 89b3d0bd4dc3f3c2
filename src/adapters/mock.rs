//! Scripted ADC adapter
//!
//! Stands in for converter hardware on the host and during bring-up.
//! Codes are replayed in order; once the script runs dry the last code
//! keeps being returned.

use crate::domain::ChannelId;
use crate::ports::adc::AdcPort;
use heapless::Deque;

/// Maximum number of codes a script can hold
pub const MOCK_SCRIPT_CAPACITY: usize = 32;

#[derive(Debug, Clone)]
pub struct MockAdc {
    script: Deque<u16, MOCK_SCRIPT_CAPACITY>,
    current: u16,
    reads: u32,
    last_channel: Option<ChannelId>,
}

impl MockAdc {
    /// Converter that always returns `raw`
    pub const fn fixed(raw: u16) -> Self {
        Self {
            script: Deque::new(),
            current: raw,
            reads: 0,
            last_channel: None,
        }
    }

    /// Converter that replays `codes` in order
    ///
    /// Codes past [`MOCK_SCRIPT_CAPACITY`] are dropped.
    pub fn scripted(codes: &[u16]) -> Self {
        let mut adc = Self::fixed(codes.first().copied().unwrap_or(0));
        for &raw in codes.iter().take(MOCK_SCRIPT_CAPACITY) {
            // capacity bounded by take()
            let _ = adc.script.push_back(raw);
        }
        adc
    }

    /// Queue one more code, handing it back if the script is full
    pub fn push(&mut self, raw: u16) -> Result<(), u16> {
        self.script.push_back(raw)
    }

    /// Replace the held value; queued codes still take precedence
    pub fn set(&mut self, raw: u16) {
        self.current = raw;
    }

    /// Number of conversions performed so far
    pub fn reads(&self) -> u32 {
        self.reads
    }

    /// Channel requested by the most recent conversion
    pub fn last_channel(&self) -> Option<ChannelId> {
        self.last_channel
    }
}

impl AdcPort for MockAdc {
    fn read_raw(&mut self, channel: ChannelId) -> u16 {
        if let Some(raw) = self.script.pop_front() {
            self.current = raw;
        }
        self.reads += 1;
        self.last_channel = Some(channel);
        self.current
    }
}
