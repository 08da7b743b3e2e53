//! Show command implementation

use anyhow::Result;
use klaxon_backend_audio::SynthError;
use klaxon_spec::{Catalog, MAX_TONE_ID, MIN_TONE_ID};
use std::process::ExitCode;

use super::json_output::{CommandOutput, JsonError, ToneRecord};
use super::reporting::print_detail;
use super::synth_exit_status;

/// Run the show command
///
/// # Arguments
/// * `tone_id` - Tone to display
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 on success, 1 if the tone does not exist
pub fn run(tone_id: u8, json_output: bool) -> Result<ExitCode> {
    let tone = Catalog::new().get(tone_id);

    if json_output {
        return match tone {
            Some(tone) => {
                CommandOutput::success(ToneRecord::from(tone)).print()?;
                Ok(ExitCode::SUCCESS)
            }
            None => {
                let error = SynthError::UnknownTone { tone_id };
                let json = JsonError::from_backend(&error).with_suggestion(format!(
                    "tone ids range from {MIN_TONE_ID} to {MAX_TONE_ID}"
                ));
                CommandOutput::<ToneRecord>::failure(vec![json]).print()?;
                Ok(ExitCode::from(synth_exit_status(&error)))
            }
        };
    }

    let tone = tone.ok_or(SynthError::UnknownTone { tone_id })?;
    print_detail(tone);
    Ok(ExitCode::SUCCESS)
}
