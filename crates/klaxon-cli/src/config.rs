//! Render configuration loaded from a JSON file.

use std::path::Path;

use anyhow::Context;
use klaxon_backend_audio::{EngineConfig, DEFAULT_AMPLITUDE, DEFAULT_SAMPLE_RATE};
use serde::{Deserialize, Serialize};

/// Default render length in seconds.
pub const DEFAULT_DURATION: f64 = 5.0;

/// Output settings for `render` and `hash`.
///
/// Every field is optional in the file; command-line flags override whatever
/// the file provides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Linear amplitude in (0, 1].
    pub amplitude: f64,
    /// Duration used when `--duration` is not given.
    pub default_duration: f64,
    /// Write two identical channels instead of one.
    pub stereo: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            sample_rate: DEFAULT_SAMPLE_RATE,
            amplitude: DEFAULT_AMPLITUDE,
            default_duration: DEFAULT_DURATION,
            stereo: true,
        }
    }
}

impl RenderConfig {
    /// Parse a config from a JSON file.
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Self = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        Ok(config)
    }

    /// Loads `path` if given, else the defaults.
    pub fn load(path: Option<&str>) -> anyhow::Result<Self> {
        match path {
            Some(path) => Self::from_file(Path::new(path)),
            None => Ok(Self::default()),
        }
    }

    /// Engine parameters for this config.
    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            sample_rate: self.sample_rate,
            amplitude: self.amplitude,
        }
    }
}
