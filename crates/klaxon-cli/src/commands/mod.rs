//! CLI command implementations

pub mod hash;
pub mod json_output;
pub mod list;
pub mod render;
pub mod search;
pub mod show;

mod reporting;

use klaxon_backend_audio::SynthError;

/// Exit status for catalog lookups, bad arguments and I/O failures.
pub const EXIT_FAILURE: u8 = 1;
/// Exit status for rejected render parameters.
pub const EXIT_SYNTHESIS: u8 = 2;

/// Process exit status for a synthesis error.
///
/// An unknown tone is a lookup failure and an encoding error is an I/O
/// failure; neither is a rejected render parameter.
pub fn synth_exit_status(error: &SynthError) -> u8 {
    match error {
        SynthError::UnknownTone { .. } | SynthError::Io(_) => EXIT_FAILURE,
        _ => EXIT_SYNTHESIS,
    }
}

/// Process exit status for an error returned by a command.
pub fn exit_status(error: &anyhow::Error) -> u8 {
    error
        .downcast_ref::<SynthError>()
        .map_or(EXIT_FAILURE, synth_exit_status)
}
