//! Command-line argument parsing.

use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;

use crate::error::BeeRangeError;
use crate::params::{tone_constants::*, BeeToneRange, ToneRequest};

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "beetone")]
#[command(about = "Bee-attraction tone synthesizer", long_about = None)]
pub struct Args {
    /// Enable debug logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a tone on the default audio output
    Play(ToneArgs),

    /// Write a tone to a WAV file
    Export {
        /// Output WAV path
        #[arg(short, long, value_name = "PATH")]
        output: PathBuf,

        #[command(flatten)]
        tone: ToneArgs,
    },

    /// Report dominant frequency and level of a mono 16-bit WAV file
    Analyze {
        /// WAV file to inspect
        #[arg(value_name = "PATH")]
        input: PathBuf,

        /// FFT window size (power of 2)
        #[arg(long, value_name = "SAMPLES", default_value_t = 8192)]
        fft_size: usize,
    },
}

/// Tone options shared by `play` and `export`
#[derive(ClapArgs, Debug, Clone)]
pub struct ToneArgs {
    /// Tone frequency in Hz (bee-friendly range is 150-250)
    #[arg(short, long, value_name = "HZ", default_value_t = DEFAULT_FREQUENCY_HZ)]
    pub frequency: f64,

    /// Tone length in seconds
    #[arg(short, long, value_name = "SECONDS", default_value_t = DEFAULT_DURATION_S)]
    pub duration: f64,

    /// Output sample rate in Hz
    #[arg(long, value_name = "HZ", default_value_t = DEFAULT_SAMPLE_RATE_HZ)]
    pub sample_rate: u32,

    /// Allow any frequency up to Nyquist, not just bee-friendly tones
    #[arg(long)]
    pub any_frequency: bool,
}

impl ToneArgs {
    /// Build the synthesis request, enforcing the bee range unless disabled
    pub fn to_request(&self) -> Result<ToneRequest, BeeRangeError> {
        if !self.any_frequency {
            BeeToneRange::default().check(self.frequency)?;
        }

        Ok(ToneRequest::new(self.frequency)
            .with_duration(self.duration)
            .with_sample_rate(self.sample_rate))
    }
}
