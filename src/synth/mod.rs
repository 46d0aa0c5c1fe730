//! Tone synthesis.
//!
//! Renders a [`ToneRequest`](crate::params::ToneRequest) into a mono
//! 16-bit PCM buffer ready for any output sink.

mod buffer;
mod tone;

// Re-export public types
pub use buffer::PcmBuffer;
pub use tone::synthesize;
