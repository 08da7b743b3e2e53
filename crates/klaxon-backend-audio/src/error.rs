//! Error types for tone synthesis.

use klaxon_spec::{BackendError, CatalogError};
use thiserror::Error;

/// Result type for synthesis operations.
pub type SynthResult<T> = Result<T, SynthError>;

/// Errors that can occur during tone rendering.
///
/// None of these are transient: the same inputs always yield the same error,
/// and no partial buffer is ever returned alongside one.
#[derive(Debug, Error)]
pub enum SynthError {
    /// Tone id not present in the catalog.
    #[error("unknown tone #{tone_id}")]
    UnknownTone {
        /// The requested id.
        tone_id: u8,
    },

    /// Duration is not a finite positive number of seconds, or is longer
    /// than a WAV file can hold.
    #[error("invalid duration: {duration} seconds")]
    InvalidDuration {
        /// The rejected duration.
        duration: f64,
    },

    /// Sample rate of zero.
    #[error("invalid sample rate: {rate}")]
    InvalidSampleRate {
        /// The rejected rate.
        rate: u32,
    },

    /// Amplitude outside (0, 1].
    #[error("invalid amplitude: {amplitude} (expected 0 < amplitude <= 1)")]
    InvalidAmplitude {
        /// The rejected amplitude.
        amplitude: f64,
    },

    /// Catalog entry whose pattern parameters are out of range.
    #[error("tone #{tone_id} has an invalid pattern: {source}")]
    InvalidPattern {
        /// The tone being rendered.
        tone_id: u8,
        /// The rejected parameter.
        source: CatalogError,
    },

    /// I/O error while writing audio.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl BackendError for SynthError {
    fn code(&self) -> &'static str {
        match self {
            SynthError::UnknownTone { .. } => "SYNTH_001",
            SynthError::InvalidDuration { .. } => "SYNTH_002",
            SynthError::InvalidSampleRate { .. } => "SYNTH_003",
            SynthError::InvalidAmplitude { .. } => "SYNTH_004",
            SynthError::Io(_) => "SYNTH_005",
            SynthError::InvalidPattern { .. } => "SYNTH_006",
        }
    }

    fn category(&self) -> &'static str {
        "synthesis"
    }
}
