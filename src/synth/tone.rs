//! Closed-form sine tone generator.

use std::f64::consts::PI;

use tracing::debug;

use super::PcmBuffer;
use crate::error::ToneError;
use crate::params::{tone_constants::FULL_SCALE, ToneRequest};

/// Render a full-scale sine wave for the request
///
/// Sample `i` is `sin(2π · i · f / sr)` scaled by `i16::MAX` and truncated
/// toward zero. The buffer holds `round(duration · sr)` samples and starts
/// at phase 0. It stops wherever that count lands in the cycle, so a
/// non-integer number of periods ends with a discontinuity (audible click).
///
/// The request is validated first; nothing is computed on failure.
pub fn synthesize(request: &ToneRequest) -> Result<PcmBuffer, ToneError> {
    request.validate()?;

    let sample_count = request.sample_count();
    let sample_rate_hz = request.sample_rate_hz as f64;

    debug!(
        frequency_hz = request.frequency_hz,
        duration_s = request.duration_s,
        sample_rate_hz = request.sample_rate_hz,
        sample_count,
        "Synthesizing tone"
    );

    let samples = (0..sample_count)
        .map(|i| {
            let phase = 2.0 * PI * i as f64 * request.frequency_hz / sample_rate_hz;
            // `as` truncates toward zero and saturates
            (phase.sin() * FULL_SCALE) as i16
        })
        .collect();

    Ok(PcmBuffer::new(samples, request.sample_rate_hz))
}
