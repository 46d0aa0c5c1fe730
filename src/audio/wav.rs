//! WAV file export and import via hound.

use std::io::{Read, Seek, Write};
use std::path::{Path, PathBuf};
use tracing::info;

use super::PcmSink;
use crate::error::ExportError;
use crate::synth::PcmBuffer;

/// Mono 16-bit integer layout at the buffer's sample rate
fn wav_spec(sample_rate_hz: u32) -> hound::WavSpec {
    hound::WavSpec {
        channels: 1,
        sample_rate: sample_rate_hz,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    }
}

/// Writes each buffer to a WAV file at a fixed path (overwriting it)
#[derive(Debug, Clone)]
pub struct WavSink {
    path: PathBuf,
}

impl WavSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PcmSink for WavSink {
    type Error = ExportError;

    fn write(&mut self, buffer: &PcmBuffer) -> Result<(), ExportError> {
        let mut writer = hound::WavWriter::create(&self.path, wav_spec(buffer.sample_rate_hz()))?;
        for &sample in buffer.samples() {
            writer.write_sample(sample)?;
        }
        writer.finalize()?;

        info!(
            "Wrote {} samples to {}",
            buffer.len(),
            self.path.display()
        );
        Ok(())
    }
}

/// Write a buffer as a mono 16-bit WAV stream to any seekable writer
pub fn write_wav_to<W: Write + Seek>(writer: W, buffer: &PcmBuffer) -> Result<(), ExportError> {
    let mut writer = hound::WavWriter::new(writer, wav_spec(buffer.sample_rate_hz()))?;
    for &sample in buffer.samples() {
        writer.write_sample(sample)?;
    }
    writer.finalize()?;
    Ok(())
}

/// Load a mono 16-bit WAV file
pub fn read_wav(path: impl AsRef<Path>) -> Result<PcmBuffer, ExportError> {
    let reader = hound::WavReader::open(path)?;
    decode(reader)
}

/// Load a mono 16-bit WAV stream
pub fn read_wav_from<R: Read>(reader: R) -> Result<PcmBuffer, ExportError> {
    let reader = hound::WavReader::new(reader)?;
    decode(reader)
}

fn decode<R: Read>(mut reader: hound::WavReader<R>) -> Result<PcmBuffer, ExportError> {
    let spec = reader.spec();
    if spec.channels != 1
        || spec.bits_per_sample != 16
        || spec.sample_format != hound::SampleFormat::Int
    {
        return Err(ExportError::UnsupportedFormat {
            channels: spec.channels,
            bits_per_sample: spec.bits_per_sample,
            format: spec.sample_format,
        });
    }

    let samples = reader
        .samples::<i16>()
        .collect::<Result<Vec<_>, _>>()?;

    Ok(PcmBuffer::new(samples, spec.sample_rate))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::ToneRequest;
    use crate::synth::synthesize;
    use std::io::Cursor;

    #[test]
    fn test_wav_stream_preserves_samples() {
        let buffer = synthesize(&ToneRequest::new(220.0).with_duration(0.1)).unwrap();

        let mut bytes = Cursor::new(Vec::new());
        write_wav_to(&mut bytes, &buffer).unwrap();

        // Header plus 2 bytes per sample
        assert!(bytes.get_ref().len() > buffer.len() * 2);

        bytes.set_position(0);
        let decoded = read_wav_from(bytes).unwrap();
        assert_eq!(decoded, buffer);
    }

    #[test]
    fn test_wav_sink_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tone.wav");
        let buffer = synthesize(&ToneRequest::default().with_duration(0.25)).unwrap();

        let mut sink = WavSink::new(&path);
        sink.write(&buffer).unwrap();

        let reader = hound::WavReader::open(&path).unwrap();
        assert_eq!(reader.spec(), wav_spec(44_100));
        assert_eq!(reader.duration() as usize, buffer.len());

        assert_eq!(read_wav(&path).unwrap(), buffer);
    }

    #[test]
    fn test_rejects_stereo() {
        let spec = hound::WavSpec {
            channels: 2,
            ..wav_spec(44_100)
        };
        let mut bytes = Cursor::new(Vec::new());
        let mut writer = hound::WavWriter::new(&mut bytes, spec).unwrap();
        writer.write_sample(0i16).unwrap();
        writer.write_sample(0i16).unwrap();
        writer.finalize().unwrap();

        bytes.set_position(0);
        assert!(matches!(
            read_wav_from(bytes),
            Err(ExportError::UnsupportedFormat { channels: 2, .. })
        ));
    }
}
