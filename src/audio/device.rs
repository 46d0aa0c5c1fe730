//! Playback on a cpal output device.

use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use cpal::{FromSample, Sample, SampleFormat, SizedSample, StreamConfig, SupportedStreamConfig};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;
use tracing::{debug, error, info, warn};

use super::PcmSink;
use crate::error::PlaybackError;
use crate::synth::PcmBuffer;

/// Extra wait beyond the buffer length before giving up on the stream
const PLAYBACK_TIMEOUT_MARGIN: Duration = Duration::from_secs(2);

/// Time for the final callback block to reach the speakers
const DRAIN_GRACE: Duration = Duration::from_millis(100);

/// Audio output device handle
///
/// `write` blocks until the buffer has played, and takes `&mut self`, so
/// one sink never plays two buffers at once.
pub struct DeviceSink {
    device: cpal::Device,
}

impl DeviceSink {
    /// Open the host's default output device
    pub fn default_output() -> Result<Self, PlaybackError> {
        let host = cpal::default_host();
        let device = host
            .default_output_device()
            .ok_or(PlaybackError::NoDevice)?;

        info!(
            "Audio: {}",
            device.name().unwrap_or_else(|_| "Unknown".to_string())
        );

        Ok(Self::new(device))
    }

    pub fn new(device: cpal::Device) -> Self {
        Self { device }
    }

    /// Pick an output config running at `sample_rate_hz`
    ///
    /// Prefers the fewest channels and a 16-bit integer format. Falls back
    /// to the device default when no config supports the rate.
    fn select_config(&self, sample_rate_hz: u32) -> Result<SupportedStreamConfig, PlaybackError> {
        let rate = cpal::SampleRate(sample_rate_hz);

        let matching = self
            .device
            .supported_output_configs()?
            .filter(|range| {
                range.min_sample_rate().0 <= sample_rate_hz
                    && sample_rate_hz <= range.max_sample_rate().0
            })
            .min_by_key(|range| (range.channels(), format_rank(range.sample_format())));

        match matching {
            Some(range) => Ok(range.with_sample_rate(rate)),
            None => {
                let fallback = self.device.default_output_config()?;
                warn!(
                    "Device does not support {}Hz, resampling to {}Hz",
                    sample_rate_hz,
                    fallback.sample_rate().0
                );
                Ok(fallback)
            }
        }
    }

    /// Build a stream for sample type `T`, play the buffer, and wait for it to drain
    fn play<T>(&self, config: &StreamConfig, buffer: &PcmBuffer) -> Result<(), PlaybackError>
    where
        T: SizedSample + FromSample<i16>,
    {
        let channels = config.channels as usize;
        let mut cursor = FrameCursor::new(buffer, config.sample_rate.0);

        let (done_tx, done_rx) = mpsc::channel();

        let stream = self.device.build_output_stream(
            config,
            move |data: &mut [T], _: &cpal::OutputCallbackInfo| {
                if cursor.fill(data, channels) {
                    let _ = done_tx.send(());
                }
            },
            |err| error!("Audio stream error: {}", err),
            None,
        )?;

        stream.play()?;

        let timeout = buffer.duration() + PLAYBACK_TIMEOUT_MARGIN;
        done_rx
            .recv_timeout(timeout)
            .map_err(|_| PlaybackError::Timeout(timeout))?;

        thread::sleep(DRAIN_GRACE);
        Ok(())
    }
}

impl PcmSink for DeviceSink {
    type Error = PlaybackError;

    fn write(&mut self, buffer: &PcmBuffer) -> Result<(), PlaybackError> {
        if buffer.is_empty() {
            debug!("Empty buffer, nothing to play");
            return Ok(());
        }

        let supported = self.select_config(buffer.sample_rate_hz())?;
        let format = supported.sample_format();
        let config: StreamConfig = supported.into();

        info!(
            "Playing {:.2}s @ {}Hz ({} ch, {:?})",
            buffer.duration().as_secs_f64(),
            config.sample_rate.0,
            config.channels,
            format
        );

        match format {
            SampleFormat::I8 => self.play::<i8>(&config, buffer),
            SampleFormat::I16 => self.play::<i16>(&config, buffer),
            SampleFormat::I32 => self.play::<i32>(&config, buffer),
            SampleFormat::I64 => self.play::<i64>(&config, buffer),
            SampleFormat::U8 => self.play::<u8>(&config, buffer),
            SampleFormat::U16 => self.play::<u16>(&config, buffer),
            SampleFormat::U32 => self.play::<u32>(&config, buffer),
            SampleFormat::U64 => self.play::<u64>(&config, buffer),
            SampleFormat::F32 => self.play::<f32>(&config, buffer),
            SampleFormat::F64 => self.play::<f64>(&config, buffer),
            other => Err(PlaybackError::UnsupportedFormat(other)),
        }
    }
}

/// Read position of the output stream over a mono source buffer
struct FrameCursor {
    samples: Vec<i16>,

    source_rate_hz: u64,
    output_rate_hz: u64,

    /// Output frames written so far that still had source samples
    frame: usize,

    drained: bool,
}

impl FrameCursor {
    fn new(buffer: &PcmBuffer, output_rate_hz: u32) -> Self {
        Self {
            samples: buffer.samples().to_vec(),
            source_rate_hz: buffer.sample_rate_hz() as u64,
            output_rate_hz: output_rate_hz as u64,
            frame: 0,
            drained: false,
        }
    }

    /// Source index for the next output frame (nearest-sample resampling)
    fn source_index(&self) -> usize {
        // Integer ratio so a whole number of output frames ends exactly on the last sample
        (self.frame as u64 * self.source_rate_hz / self.output_rate_hz) as usize
    }

    /// Fill interleaved output frames, copying the mono source to every channel
    ///
    /// Frames past the end of the source are silence. Returns `true` exactly
    /// once: on the call that consumes the last source sample.
    fn fill<T>(&mut self, data: &mut [T], channels: usize) -> bool
    where
        T: Sample + FromSample<i16>,
    {
        for out in data.chunks_mut(channels) {
            let value = match self.samples.get(self.source_index()) {
                Some(&sample) => {
                    self.frame += 1;
                    T::from_sample(sample)
                }
                None => T::EQUILIBRIUM,
            };
            out.fill(value);
        }

        if !self.drained && self.source_index() >= self.samples.len() {
            self.drained = true;
            return true;
        }
        false
    }
}

/// Lower is better: native 16-bit first, then float
fn format_rank(format: SampleFormat) -> u8 {
    match format {
        SampleFormat::I16 => 0,
        SampleFormat::F32 => 1,
        _ => 2,
    }
}
