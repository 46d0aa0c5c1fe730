//! Immutable PCM sample buffer.

use std::time::Duration;

/// Mono signed 16-bit PCM samples at a fixed sample rate
///
/// Produced once by synthesis (or read from a WAV file) and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PcmBuffer {
    samples: Vec<i16>,
    sample_rate_hz: u32,
}

impl PcmBuffer {
    pub(crate) fn new(samples: Vec<i16>, sample_rate_hz: u32) -> Self {
        Self {
            samples,
            sample_rate_hz,
        }
    }

    pub fn samples(&self) -> &[i16] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn sample_rate_hz(&self) -> u32 {
        self.sample_rate_hz
    }

    /// Playback length at the buffer's sample rate
    pub fn duration(&self) -> Duration {
        if self.sample_rate_hz == 0 {
            return Duration::ZERO;
        }
        Duration::from_secs_f64(self.samples.len() as f64 / self.sample_rate_hz as f64)
    }

    /// Take ownership of the raw samples
    pub fn into_samples(self) -> Vec<i16> {
        self.samples
    }
}
