//! Spectral analysis configuration.

use crate::error::AnalysisError;

/// FFT analysis configuration
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    /// FFT window size (must be power of 2)
    /// 8192 @ 44.1kHz ≈ 5.4 Hz per bin, fine enough for the 150-250 Hz band
    pub fft_size: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self { fft_size: 8192 }
    }
}

impl AnalysisConfig {
    /// Width of one FFT bin (Hz)
    pub fn bin_resolution_hz(&self, sample_rate_hz: u32) -> f64 {
        sample_rate_hz as f64 / self.fft_size as f64
    }

    /// Convert frequency (Hz) to nearest FFT bin index
    pub fn hz_to_bin(&self, hz: f64, sample_rate_hz: u32) -> usize {
        (hz / self.bin_resolution_hz(sample_rate_hz)).round() as usize
    }

    /// Centre frequency of an FFT bin (Hz)
    pub fn bin_to_hz(&self, bin: usize, sample_rate_hz: u32) -> f64 {
        bin as f64 * self.bin_resolution_hz(sample_rate_hz)
    }

    /// Validate configuration (FFT size must be power of 2)
    pub fn validate(&self) -> Result<(), AnalysisError> {
        if !self.fft_size.is_power_of_two() || self.fft_size < 2 {
            return Err(AnalysisError::InvalidFftSize(self.fft_size));
        }
        Ok(())
    }
}
