//! Tone request parameters.

use crate::error::{Parameter, ToneError};

/// Defaults used by the bee sound player
pub mod tone_constants {
    /// Tone played when no frequency is given (Hz)
    pub const DEFAULT_FREQUENCY_HZ: f64 = 200.0;

    /// Length of every played tone (seconds)
    pub const DEFAULT_DURATION_S: f64 = 2.0;

    /// Output sample rate (Hz)
    pub const DEFAULT_SAMPLE_RATE_HZ: u32 = 44_100;

    /// Largest positive 16-bit sample, used as the sine amplitude
    pub const FULL_SCALE: f64 = i16::MAX as f64;

    /// Longest buffer a request may ask for (samples)
    /// 2^30 samples = 2 GiB of 16-bit PCM, still fits one WAV data chunk
    /// (≈ 6.7 hours @ 44.1kHz)
    pub const MAX_SAMPLES: usize = 1 << 30;
}

use tone_constants::*;

/// A single request for a fixed-duration sine tone
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToneRequest {
    /// Tone frequency (Hz), must lie in (0, sample_rate_hz / 2]
    pub frequency_hz: f64,

    /// Tone length (seconds), must be > 0
    pub duration_s: f64,

    /// Samples per second of the rendered buffer
    pub sample_rate_hz: u32,
}

impl Default for ToneRequest {
    fn default() -> Self {
        Self {
            frequency_hz: DEFAULT_FREQUENCY_HZ,
            duration_s: DEFAULT_DURATION_S,
            sample_rate_hz: DEFAULT_SAMPLE_RATE_HZ,
        }
    }
}

impl ToneRequest {
    /// Request a tone at `frequency_hz` with the default duration and sample rate
    pub fn new(frequency_hz: f64) -> Self {
        Self {
            frequency_hz,
            ..Self::default()
        }
    }

    pub fn with_duration(mut self, duration_s: f64) -> Self {
        self.duration_s = duration_s;
        self
    }

    pub fn with_sample_rate(mut self, sample_rate_hz: u32) -> Self {
        self.sample_rate_hz = sample_rate_hz;
        self
    }

    /// Nyquist frequency for this request's sample rate (Hz)
    pub fn nyquist_hz(&self) -> f64 {
        self.sample_rate_hz as f64 / 2.0
    }

    /// Number of samples the rendered buffer holds: round(duration * rate)
    pub fn sample_count(&self) -> usize {
        (self.duration_s * self.sample_rate_hz as f64).round() as usize
    }

    /// Validate every field, reporting the first one out of range
    ///
    /// Checked in order: sample rate, duration, frequency. Frequency
    /// bounds depend on the sample rate, so it goes last.
    pub fn validate(&self) -> Result<(), ToneError> {
        if self.sample_rate_hz == 0 {
            return Err(ToneError::invalid(
                Parameter::SampleRate,
                0.0,
                "must be > 0",
            ));
        }

        if !self.duration_s.is_finite() || self.duration_s <= 0.0 {
            return Err(ToneError::invalid(
                Parameter::Duration,
                self.duration_s,
                "must be a finite number > 0",
            ));
        }

        if (self.duration_s * self.sample_rate_hz as f64).round() > MAX_SAMPLES as f64 {
            return Err(ToneError::invalid(
                Parameter::Duration,
                self.duration_s,
                "buffer would exceed the maximum sample count",
            ));
        }

        if !self.frequency_hz.is_finite() || self.frequency_hz <= 0.0 {
            return Err(ToneError::invalid(
                Parameter::Frequency,
                self.frequency_hz,
                "must be a finite number > 0",
            ));
        }

        if self.frequency_hz > self.nyquist_hz() {
            return Err(ToneError::invalid(
                Parameter::Frequency,
                self.frequency_hz,
                "must not exceed half the sample rate",
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_player_constants() {
        let request = ToneRequest::default();
        assert_eq!(request.frequency_hz, 200.0);
        assert_eq!(request.duration_s, 2.0);
        assert_eq!(request.sample_rate_hz, 44_100);
        assert_eq!(request.sample_count(), 88_200);
    }

    #[test]
    fn test_sample_count_rounds() {
        // 0.5 s @ 3 Hz = 1.5 samples, rounds away from zero
        let request = ToneRequest::new(1.0)
            .with_duration(0.5)
            .with_sample_rate(3);
        assert_eq!(request.sample_count(), 2);

        let request = ToneRequest::new(1.0)
            .with_duration(0.1)
            .with_sample_rate(44_100);
        assert_eq!(request.sample_count(), 4_410);
    }

    #[test]
    fn test_validate_accepts_nyquist() {
        assert!(ToneRequest::new(22_050.0).validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_above_nyquist() {
        let err = ToneRequest::new(22_051.0).validate().unwrap_err();
        assert_eq!(err.parameter(), Parameter::Frequency);
    }

    #[test]
    fn test_validate_rejects_bad_duration() {
        for duration in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let err = ToneRequest::default()
                .with_duration(duration)
                .validate()
                .unwrap_err();
            assert_eq!(err.parameter(), Parameter::Duration);
        }
    }

    #[test]
    fn test_validate_rejects_oversized_buffer() {
        let err = ToneRequest::new(200.0)
            .with_duration(1e30)
            .validate()
            .unwrap_err();
        assert_eq!(err.parameter(), Parameter::Duration);

        // Exactly at the limit is still accepted
        let at_limit = ToneRequest::new(1.0)
            .with_duration(MAX_SAMPLES as f64 / 2.0)
            .with_sample_rate(2);
        assert!(at_limit.validate().is_ok());
        assert_eq!(at_limit.sample_count(), MAX_SAMPLES);

        let over = at_limit.with_duration((MAX_SAMPLES + 1) as f64 / 2.0);
        assert_eq!(over.validate().unwrap_err().parameter(), Parameter::Duration);
    }

    #[test]
    fn test_validate_rejects_zero_sample_rate() {
        let err = ToneRequest::default()
            .with_sample_rate(0)
            .validate()
            .unwrap_err();
        assert_eq!(err.parameter(), Parameter::SampleRate);
    }

    #[test]
    fn test_validate_rejects_non_positive_frequency() {
        for frequency in [0.0, -200.0, f64::NAN] {
            let err = ToneRequest::new(frequency).validate().unwrap_err();
            assert_eq!(err.parameter(), Parameter::Frequency);
        }
    }
}
