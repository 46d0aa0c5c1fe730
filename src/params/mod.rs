//! Parameter definitions with physical units and documented semantics.
//!
//! All magic numbers are extracted here with:
//! - Physical units (seconds, Hz)
//! - Documented ranges and meanings
//! - Validation before use

mod analysis;
mod bee;
mod tone;

// Re-export all types
pub use analysis::AnalysisConfig;
pub use bee::BeeToneRange;
pub use tone::{tone_constants, ToneRequest};
