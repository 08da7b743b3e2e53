//! JSON output types for machine-readable CLI output.
//!
//! Every command accepts `--json`. The output is a single pretty-printed
//! object on stdout with a `success` flag, an `errors` list and a
//! command-specific `result` on success.

use klaxon_spec::{BackendError, TonePattern, TonePatternSpec};
use serde::Serialize;

/// Error codes for CLI operations.
///
/// Library errors pass their own codes through (`CATALOG_xxx`, `SYNTH_xxx`).
pub mod error_codes {
    /// File could not be read
    pub const FILE_READ: &str = "CLI_001";
    /// Config file could not be parsed
    pub const CONFIG_PARSE: &str = "CLI_002";
    /// Output file could not be written
    pub const FILE_WRITE: &str = "CLI_003";
    /// Search invoked without any filter
    pub const NO_FILTER: &str = "CLI_004";
}

/// A structured error in JSON output.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct JsonError {
    /// Stable error code (e.g., "CLI_001", "SYNTH_002")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Source file path (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    /// Suggestion for fixing the error (if available)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl JsonError {
    /// Creates a new error with code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            file: None,
            suggestion: None,
        }
    }

    /// Creates an error from a library error, keeping its stable code.
    pub fn from_backend(error: &impl BackendError) -> Self {
        Self::new(error.code(), error.message())
    }

    /// Sets the file path for this error.
    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }

    /// Sets a suggestion for fixing the error.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

/// Catalog entry as reported by `list`, `show` and `search`.
#[derive(Debug, Clone, Serialize)]
pub struct ToneRecord {
    /// Tone id
    pub id: u8,
    /// Frequency summary text
    pub frequency: String,
    /// Description text
    pub description: String,
    /// DIP switch configuration
    pub dip_switches: String,
    /// Standard, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub standard: Option<String>,
    /// Pattern family name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Full pattern parameters
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<TonePattern>,
}

impl From<&TonePatternSpec> for ToneRecord {
    fn from(tone: &TonePatternSpec) -> Self {
        Self {
            id: tone.id,
            frequency: tone.frequency.to_string(),
            description: tone.description.to_string(),
            dip_switches: tone.dip_switches.to_string(),
            standard: tone.standard.map(str::to_string),
            kind: tone.kind().map(|kind| kind.to_string()),
            pattern: tone.pattern,
        }
    }
}

/// Details of a rendered tone.
#[derive(Debug, Clone, Serialize)]
pub struct RenderRecord {
    /// Tone id
    pub tone: u8,
    /// Output path (absent for `hash`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    /// Requested duration in seconds
    pub duration_seconds: f64,
    /// Sample rate in Hz
    pub sample_rate: u32,
    /// Frames per channel
    pub frames: usize,
    /// Channel count written
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channels: Option<u16>,
    /// BLAKE3 hash of the PCM data
    pub pcm_hash: String,
}

/// JSON output envelope shared by all commands.
#[derive(Debug, Clone, Serialize)]
pub struct CommandOutput<T> {
    /// Whether the command succeeded
    pub success: bool,
    /// Errors encountered
    pub errors: Vec<JsonError>,
    /// Command result (on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<T>,
}

impl<T: Serialize> CommandOutput<T> {
    /// Creates a successful output.
    pub fn success(result: T) -> Self {
        Self {
            success: true,
            errors: Vec::new(),
            result: Some(result),
        }
    }

    /// Creates a failed output.
    pub fn failure(errors: Vec<JsonError>) -> Self {
        Self {
            success: false,
            errors,
            result: None,
        }
    }

    /// Prints the output to stdout.
    pub fn print(&self) -> anyhow::Result<()> {
        println!("{}", serde_json::to_string_pretty(self)?);
        Ok(())
    }
}
