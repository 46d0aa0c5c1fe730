//! Beetone - Bee-attraction tone synthesizer
//!
//! Plays or exports short pure tones that mimic bee wing beats, and
//! checks WAV files for the frequency they carry.

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use beetone::analysis::analyze;
use beetone::audio::{read_wav, DeviceSink, PcmSink, WavSink};
use beetone::cli::{Args, Command};
use beetone::params::AnalysisConfig;
use beetone::synth::synthesize;

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_tracing(args.verbose);

    match args.command {
        Command::Play(tone) => {
            let request = tone.to_request()?;
            let buffer = synthesize(&request)?;

            info!("Playing {} Hz", request.frequency_hz);
            let mut sink = DeviceSink::default_output()?;
            sink.write(&buffer)?;
        }
        Command::Export { output, tone } => {
            let request = tone.to_request()?;
            let buffer = synthesize(&request)?;

            let mut sink = WavSink::new(output);
            sink.write(&buffer)?;
        }
        Command::Analyze { input, fft_size } => {
            let buffer = read_wav(&input)?;
            let report = analyze(&buffer, &AnalysisConfig { fft_size })?;

            println!("File:      {}", input.display());
            println!("Samples:   {} @ {}Hz", buffer.len(), buffer.sample_rate_hz());
            println!("Duration:  {:.3}s", report.duration.as_secs_f64());
            println!("Dominant:  {:.1} Hz", report.dominant_hz);
            println!("Peak:      {}", report.peak_amplitude);
        }
    }

    Ok(())
}
