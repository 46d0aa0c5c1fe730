//! Error types for synthesis, output sinks and analysis.

use std::fmt;

/// Tone parameter that failed validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parameter {
    Frequency,
    Duration,
    SampleRate,
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Parameter::Frequency => "frequency",
            Parameter::Duration => "duration",
            Parameter::SampleRate => "sample rate",
        };
        f.write_str(name)
    }
}

/// Errors raised before a tone is synthesized
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ToneError {
    /// A request field is outside its valid domain
    #[error("invalid {parameter}: {value} ({reason})")]
    InvalidParameter {
        parameter: Parameter,
        value: f64,
        reason: &'static str,
    },
}

impl ToneError {
    pub(crate) fn invalid(parameter: Parameter, value: f64, reason: &'static str) -> Self {
        ToneError::InvalidParameter {
            parameter,
            value,
            reason,
        }
    }

    /// Which parameter was rejected
    pub fn parameter(&self) -> Parameter {
        match self {
            ToneError::InvalidParameter { parameter, .. } => *parameter,
        }
    }
}

/// Frequency is valid audio but not a bee-friendly tone
///
/// Raised at the command line, before a request reaches the synthesizer.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[error("{frequency_hz} Hz is outside the bee-friendly range {min_hz}-{max_hz} Hz")]
pub struct BeeRangeError {
    pub frequency_hz: f64,
    pub min_hz: f64,
    pub max_hz: f64,
}

/// Errors from playing a buffer on an audio output device
#[derive(thiserror::Error, Debug)]
pub enum PlaybackError {
    #[error("No audio output device found")]
    NoDevice,

    #[error("Unsupported device sample format: {0:?}")]
    UnsupportedFormat(cpal::SampleFormat),

    #[error("Failed to query supported output configs: {0}")]
    SupportedConfigs(#[from] cpal::SupportedStreamConfigsError),

    #[error("Failed to get default output config: {0}")]
    DefaultConfig(#[from] cpal::DefaultStreamConfigError),

    #[error("Failed to build audio stream: {0}")]
    BuildStream(#[from] cpal::BuildStreamError),

    #[error("Failed to start audio stream: {0}")]
    PlayStream(#[from] cpal::PlayStreamError),

    /// The stream never reported the buffer as drained
    #[error("Playback did not finish within {0:?}")]
    Timeout(std::time::Duration),
}

/// Errors from reading or writing WAV files
#[derive(thiserror::Error, Debug)]
pub enum ExportError {
    #[error(transparent)]
    Wav(#[from] hound::Error),

    /// Only mono 16-bit integer PCM is handled
    #[error("Unsupported WAV layout: {channels} channel(s), {bits_per_sample}-bit {format:?}")]
    UnsupportedFormat {
        channels: u16,
        bits_per_sample: u16,
        format: hound::SampleFormat,
    },
}

/// Errors from spectral analysis
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    #[error("FFT size must be a power of 2, got {0}")]
    InvalidFftSize(usize),

    #[error("Buffer has {len} samples, FFT needs at least {needed}")]
    TooShort { len: usize, needed: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_parameter_message_names_field() {
        let err = ToneError::invalid(Parameter::SampleRate, 0.0, "must be > 0");
        assert_eq!(err.to_string(), "invalid sample rate: 0 (must be > 0)");
        assert_eq!(err.parameter(), Parameter::SampleRate);
    }

    #[test]
    fn test_bee_range_message() {
        let err = BeeRangeError {
            frequency_hz: 300.0,
            min_hz: 150.0,
            max_hz: 250.0,
        };
        assert_eq!(
            err.to_string(),
            "300 Hz is outside the bee-friendly range 150-250 Hz"
        );
    }
}
