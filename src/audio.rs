//! Output sinks for synthesized PCM.
//!
//! The audio device is an explicit handle ([`DeviceSink`]) rather than
//! global state, so synthesis stays testable without any audio subsystem.

mod device;
mod wav;

use crate::synth::PcmBuffer;

// Re-export public types
pub use device::DeviceSink;
pub use wav::{read_wav, read_wav_from, write_wav_to, WavSink};

/// Anything that consumes a complete mono 16-bit PCM buffer
pub trait PcmSink {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Consume the whole buffer, returning once the sink is done with it
    fn write(&mut self, buffer: &PcmBuffer) -> Result<(), Self::Error>;
}
