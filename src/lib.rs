//! Beetone library - Bee-attraction tone synthesis

pub mod analysis;
pub mod audio;
pub mod cli;
pub mod error;
pub mod params;
pub mod synth;
