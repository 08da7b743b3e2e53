//! Hash command implementation
//!
//! Prints the BLAKE3 hash of a tone's mono PCM data without writing a file.

use anyhow::Result;
use std::process::ExitCode;

use super::json_output::{CommandOutput, RenderRecord};
use super::render::{config_failure, render_waveform, synth_failure};
use crate::config::RenderConfig;

/// Run the hash command
///
/// # Arguments
/// * `tone_id` - Tone to render
/// * `duration` - Duration in seconds (config default if absent)
/// * `config_path` - Optional config file
/// * `json_output` - Whether to output machine-readable JSON
pub fn run(
    tone_id: u8,
    duration: Option<f64>,
    config_path: Option<&str>,
    json_output: bool,
) -> Result<ExitCode> {
    let config = match load(duration, config_path) {
        Ok(config) => config,
        Err(e) if json_output => return config_failure(config_path, &e),
        Err(e) => return Err(e),
    };

    let waveform = match render_waveform(&config, tone_id) {
        Ok(waveform) => waveform,
        Err(e) if json_output => return synth_failure(&e),
        Err(e) => return Err(e.into()),
    };

    if json_output {
        CommandOutput::success(RenderRecord {
            tone: tone_id,
            output: None,
            duration_seconds: config.default_duration,
            sample_rate: waveform.sample_rate(),
            frames: waveform.len(),
            channels: None,
            pcm_hash: waveform.pcm_hash(),
        })
        .print()?;
    } else {
        println!("{}", waveform.pcm_hash());
    }

    Ok(ExitCode::SUCCESS)
}

fn load(duration: Option<f64>, config_path: Option<&str>) -> Result<RenderConfig> {
    let mut config = RenderConfig::load(config_path)?;
    if let Some(duration) = duration {
        config.default_duration = duration;
    }
    Ok(config)
}
