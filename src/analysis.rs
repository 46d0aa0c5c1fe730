//! Spectral checks on rendered tones.
//!
//! Used to confirm that a buffer (synthesized or loaded from WAV) carries
//! the frequency it was asked for.

use rustfft::{num_complex::Complex, FftPlanner};
use std::f64::consts::PI;
use std::time::Duration;

use crate::error::AnalysisError;
use crate::params::AnalysisConfig;
use crate::synth::PcmBuffer;

/// Summary of a PCM buffer
#[derive(Debug, Clone, PartialEq)]
pub struct ToneReport {
    /// Centre of the strongest FFT bin (Hz)
    pub dominant_hz: f64,

    /// Largest absolute sample value
    pub peak_amplitude: i16,

    pub duration: Duration,
}

/// Measure dominant frequency, peak level and length
pub fn analyze(buffer: &PcmBuffer, config: &AnalysisConfig) -> Result<ToneReport, AnalysisError> {
    Ok(ToneReport {
        dominant_hz: dominant_frequency(buffer, config)?,
        peak_amplitude: peak_amplitude(buffer),
        duration: buffer.duration(),
    })
}

/// Frequency of the strongest spectral component in the first `fft_size` samples
///
/// Accuracy is one bin, `sample_rate / fft_size`. DC and bins above
/// Nyquist are ignored.
pub fn dominant_frequency(buffer: &PcmBuffer, config: &AnalysisConfig) -> Result<f64, AnalysisError> {
    config.validate()?;

    let fft_size = config.fft_size;
    if buffer.len() < fft_size {
        return Err(AnalysisError::TooShort {
            len: buffer.len(),
            needed: fft_size,
        });
    }

    let mut planner = FftPlanner::<f64>::new();
    let fft = planner.plan_fft_forward(fft_size);

    // Apply Hann window to normalized samples
    let mut spectrum: Vec<Complex<f64>> = buffer.samples()[..fft_size]
        .iter()
        .enumerate()
        .map(|(i, &s)| Complex::new(s as f64 / i16::MAX as f64 * hann_window(i, fft_size), 0.0))
        .collect();

    fft.process(&mut spectrum);

    let peak_bin = spectrum[1..fft_size / 2]
        .iter()
        .enumerate()
        .max_by(|(_, a), (_, b)| a.norm().total_cmp(&b.norm()))
        .map(|(i, _)| i + 1)
        .unwrap_or(0);

    Ok(config.bin_to_hz(peak_bin, buffer.sample_rate_hz()))
}

/// Largest absolute sample value (saturating, so `i16::MIN` reports `i16::MAX`)
pub fn peak_amplitude(buffer: &PcmBuffer) -> i16 {
    buffer
        .samples()
        .iter()
        .map(|s| s.saturating_abs())
        .max()
        .unwrap_or(0)
}

/// Hann window function for FFT analysis
pub fn hann_window(index: usize, size: usize) -> f64 {
    0.5 * (1.0 - ((2.0 * PI * index as f64) / (size as f64 - 1.0)).cos())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::ToneRequest;
    use crate::synth::synthesize;

    #[test]
    fn test_hann_window() {
        let size = 1024;

        // Hann window should be 0 at edges, 1 at center
        assert!((hann_window(0, size) - 0.0).abs() < 0.01);
        assert!((hann_window(size - 1, size) - 0.0).abs() < 0.01);
        assert!((hann_window(size / 2, size) - 1.0).abs() < 0.01);
    }

    #[test]
    fn test_dominant_frequency_of_bee_tones() {
        let config = AnalysisConfig::default();
        let resolution = config.bin_resolution_hz(44_100);

        for frequency in [150.0, 200.0, 237.0, 250.0] {
            let buffer = synthesize(&ToneRequest::new(frequency)).unwrap();
            let measured = dominant_frequency(&buffer, &config).unwrap();
            assert!(
                (measured - frequency).abs() <= resolution,
                "{} Hz measured as {} Hz",
                frequency,
                measured
            );
        }
    }

    #[test]
    fn test_too_short() {
        let buffer = synthesize(&ToneRequest::new(200.0).with_duration(0.01)).unwrap();
        assert_eq!(
            dominant_frequency(&buffer, &AnalysisConfig::default()),
            Err(AnalysisError::TooShort {
                len: 441,
                needed: 8192
            })
        );
    }

    #[test]
    fn test_invalid_fft_size() {
        let buffer = synthesize(&ToneRequest::default()).unwrap();
        let config = AnalysisConfig { fft_size: 3000 };
        assert_eq!(
            dominant_frequency(&buffer, &config),
            Err(AnalysisError::InvalidFftSize(3000))
        );
    }

    #[test]
    fn test_report() {
        let buffer = synthesize(&ToneRequest::default()).unwrap();
        let report = analyze(&buffer, &AnalysisConfig::default()).unwrap();

        assert!(report.peak_amplitude > 32_700);
        assert_eq!(report.duration, Duration::from_secs(2));
    }

    #[test]
    fn test_peak_amplitude_saturates() {
        let buffer = PcmBuffer::new(vec![0, i16::MIN, 12], 8_000);
        assert_eq!(peak_amplitude(&buffer), i16::MAX);

        let empty = PcmBuffer::new(Vec::new(), 8_000);
        assert_eq!(peak_amplitude(&empty), 0);
    }
}
