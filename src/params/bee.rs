//! Bee-friendly frequency band.

use crate::error::BeeRangeError;

/// Frequencies that mimic bee wing beats
///
/// Narrower than what the synthesizer accepts; the CLI enforces it unless
/// told otherwise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BeeToneRange {
    /// Lowest offered tone (Hz)
    pub min_hz: f64,

    /// Highest offered tone (Hz)
    pub max_hz: f64,

    /// Tone selected before any adjustment (Hz)
    pub default_hz: f64,
}

impl Default for BeeToneRange {
    fn default() -> Self {
        Self {
            min_hz: 150.0,
            max_hz: 250.0,
            default_hz: 200.0,
        }
    }
}

impl BeeToneRange {
    pub fn contains(&self, frequency_hz: f64) -> bool {
        (self.min_hz..=self.max_hz).contains(&frequency_hz)
    }

    /// Reject frequencies outside the band
    pub fn check(&self, frequency_hz: f64) -> Result<f64, BeeRangeError> {
        if self.contains(frequency_hz) {
            Ok(frequency_hz)
        } else {
            Err(BeeRangeError {
                frequency_hz,
                min_hz: self.min_hz,
                max_hz: self.max_hz,
            })
        }
    }
}
