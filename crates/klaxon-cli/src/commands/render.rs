//! Render command implementation
//!
//! Renders one tone to a WAV file and reports its frame count and PCM hash.

use anyhow::{Context, Result};
use colored::Colorize;
use klaxon_backend_audio::{SynthError, SynthResult, SynthesisEngine, Waveform};
use std::fs;
use std::process::ExitCode;
use tracing::info;

use super::json_output::{error_codes, CommandOutput, JsonError, RenderRecord};
use super::{synth_exit_status, EXIT_FAILURE};
use crate::config::RenderConfig;

/// Arguments of the render command.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderArgs {
    /// Tone id
    pub tone: u8,
    /// Duration in seconds (config default if absent)
    pub duration: Option<f64>,
    /// Output path (`tone_NN.wav` if absent)
    pub output: Option<String>,
    /// Sample rate override
    pub sample_rate: Option<u32>,
    /// Amplitude override
    pub amplitude: Option<f64>,
    /// Write a single channel
    pub mono: bool,
    /// Config file path
    pub config: Option<String>,
}

impl RenderArgs {
    /// Loads the config file (if any) and applies command-line overrides.
    pub fn resolve_config(&self) -> Result<RenderConfig> {
        let mut config = RenderConfig::load(self.config.as_deref())?;
        if let Some(sample_rate) = self.sample_rate {
            config.sample_rate = sample_rate;
        }
        if let Some(amplitude) = self.amplitude {
            config.amplitude = amplitude;
        }
        if let Some(duration) = self.duration {
            config.default_duration = duration;
        }
        if self.mono {
            config.stereo = false;
        }
        Ok(config)
    }

    /// Path the WAV file is written to.
    pub fn output_path(&self) -> String {
        self.output
            .clone()
            .unwrap_or_else(|| default_output_path(self.tone))
    }
}

/// Default file name for a tone.
pub fn default_output_path(tone_id: u8) -> String {
    format!("tone_{tone_id:02}.wav")
}

/// Renders `tone_id` with the settings in `config`.
pub(super) fn render_waveform(config: &RenderConfig, tone_id: u8) -> SynthResult<Waveform> {
    SynthesisEngine::builtin(config.engine_config())?.render(tone_id, config.default_duration)
}

/// Run the render command
///
/// # Arguments
/// * `args` - Tone, output and parameter overrides
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 on success, 1 on lookup or I/O errors, 2 on rejected
/// render parameters
pub fn run(args: &RenderArgs, json_output: bool) -> Result<ExitCode> {
    if json_output {
        run_json(args)
    } else {
        run_human(args)
    }
}

fn run_human(args: &RenderArgs) -> Result<ExitCode> {
    let config = args.resolve_config()?;
    let waveform = render_waveform(&config, args.tone)?;
    let wav = waveform.to_wav(config.stereo)?;
    let path = args.output_path();

    fs::write(&path, &wav.wav_data).with_context(|| format!("Failed to write WAV file: {}", path))?;
    info!(tone = args.tone, path = %path, frames = wav.num_samples, "wrote WAV file");

    println!(
        "{} tone {} to {}",
        "Rendered".green().bold(),
        args.tone,
        path.bold()
    );
    println!(
        "  {} {} at {} Hz, {}",
        "Frames:".dimmed(),
        wav.num_samples,
        wav.sample_rate,
        if wav.is_stereo { "stereo" } else { "mono" }
    );
    println!("  {} {:.3} s", "Duration:".dimmed(), wav.duration_seconds());
    println!("  {} {}", "PCM hash:".dimmed(), wav.pcm_hash);

    Ok(ExitCode::SUCCESS)
}

fn run_json(args: &RenderArgs) -> Result<ExitCode> {
    let config = match args.resolve_config() {
        Ok(config) => config,
        Err(e) => return config_failure(args.config.as_deref(), &e),
    };

    let waveform = match render_waveform(&config, args.tone) {
        Ok(waveform) => waveform,
        Err(e) => return synth_failure(&e),
    };

    let wav = match waveform.to_wav(config.stereo) {
        Ok(wav) => wav,
        Err(e) => return synth_failure(&e),
    };
    let path = args.output_path();
    if let Err(e) = fs::write(&path, &wav.wav_data) {
        let error = JsonError::new(error_codes::FILE_WRITE, format!("Failed to write WAV file: {e}"))
            .with_file(&path);
        CommandOutput::<RenderRecord>::failure(vec![error]).print()?;
        return Ok(ExitCode::from(EXIT_FAILURE));
    }
    info!(tone = args.tone, path = %path, frames = wav.num_samples, "wrote WAV file");

    CommandOutput::success(RenderRecord {
        tone: args.tone,
        output: Some(path),
        duration_seconds: config.default_duration,
        sample_rate: wav.sample_rate,
        frames: wav.num_samples,
        channels: Some(if wav.is_stereo { 2 } else { 1 }),
        pcm_hash: wav.pcm_hash,
    })
    .print()?;

    Ok(ExitCode::SUCCESS)
}

/// Reports a config load failure as JSON.
pub(super) fn config_failure(path: Option<&str>, e: &anyhow::Error) -> Result<ExitCode> {
    let code = if e.root_cause().is::<std::io::Error>() {
        error_codes::FILE_READ
    } else {
        error_codes::CONFIG_PARSE
    };
    let mut error = JsonError::new(code, format!("{e:#}"));
    if let Some(path) = path {
        error = error.with_file(path);
    }
    CommandOutput::<RenderRecord>::failure(vec![error]).print()?;
    Ok(ExitCode::from(EXIT_FAILURE))
}

/// Reports a synthesis failure as JSON.
pub(super) fn synth_failure(e: &SynthError) -> Result<ExitCode> {
    CommandOutput::<RenderRecord>::failure(vec![JsonError::from_backend(e)]).print()?;
    Ok(ExitCode::from(synth_exit_status(e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_output_path() {
        assert_eq!(default_output_path(7), "tone_07.wav");
        assert_eq!(default_output_path(32), "tone_32.wav");
    }

    #[test]
    fn test_overrides_apply_over_defaults() {
        let args = RenderArgs {
            tone: 3,
            duration: Some(2.0),
            sample_rate: Some(8_000),
            mono: true,
            ..Default::default()
        };
        let config = args.resolve_config().unwrap();
        assert_eq!(
            config,
            RenderConfig {
                sample_rate: 8_000,
                amplitude: 0.5,
                default_duration: 2.0,
                stereo: false,
            }
        );
        assert_eq!(args.output_path(), "tone_03.wav");
    }

    #[test]
    fn test_render_waveform_uses_config() {
        let config = RenderConfig {
            sample_rate: 8_000,
            default_duration: 0.5,
            ..RenderConfig::default()
        };
        let waveform = render_waveform(&config, 1).unwrap();
        assert_eq!(waveform.len(), 4_000);
        assert_eq!(waveform.sample_rate(), 8_000);
    }

    #[test]
    fn test_render_waveform_rejects_bad_amplitude() {
        let config = RenderConfig {
            amplitude: 3.0,
            ..RenderConfig::default()
        };
        assert!(matches!(
            render_waveform(&config, 1),
            Err(SynthError::InvalidAmplitude { .. })
        ));
    }
}
