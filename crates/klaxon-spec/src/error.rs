//! Error types for the tone catalog.

use thiserror::Error;

/// Result type for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Errors that can occur while querying or decoding catalog data.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogError {
    /// Descriptive frequency text holds no `<digits>Hz` token.
    #[error("no frequency found in '{text}'")]
    MalformedFrequencyText {
        /// The text that failed to parse.
        text: String,
    },

    /// A DIP switch string that is not five `O`/`I` positions.
    #[error("invalid DIP switch configuration '{config}': {reason}")]
    InvalidDipSwitches {
        /// The offending configuration string.
        config: String,
        /// Why it was rejected.
        reason: String,
    },

    /// A pattern kind name that does not match any family.
    #[error("unknown pattern kind '{name}'")]
    UnknownPatternKind {
        /// The unrecognized name.
        name: String,
    },

    /// A pattern parameter that is out of range.
    #[error("invalid pattern parameter '{name}': {value}")]
    InvalidPatternParameter {
        /// Parameter name.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },
}

impl CatalogError {
    /// Creates an invalid DIP switch error.
    pub fn invalid_dip(config: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidDipSwitches {
            config: config.into(),
            reason: reason.into(),
        }
    }
}

/// Common trait for library errors.
///
/// Every error type in the workspace implements this so the CLI can report
/// stable codes alongside the human-readable message:
/// - Consistent error codes for `--json` output
/// - A category for grouping related failures
///
/// # Example
///
/// ```ignore
/// use klaxon_spec::BackendError;
///
/// fn report<E: BackendError>(err: E) {
///     eprintln!("[{}] {}", err.code(), err.message());
/// }
/// ```
pub trait BackendError: std::error::Error {
    /// Returns a stable code like "CATALOG_001" or "SYNTH_002".
    fn code(&self) -> &'static str;

    /// Returns a human-readable message describing the error.
    fn message(&self) -> String {
        self.to_string()
    }

    /// Returns the error category, e.g. "catalog" or "synthesis".
    fn category(&self) -> &'static str;
}

impl BackendError for CatalogError {
    fn code(&self) -> &'static str {
        match self {
            CatalogError::MalformedFrequencyText { .. } => "CATALOG_001",
            CatalogError::InvalidDipSwitches { .. } => "CATALOG_002",
            CatalogError::UnknownPatternKind { .. } => "CATALOG_003",
            CatalogError::InvalidPatternParameter { .. } => "CATALOG_004",
        }
    }

    fn category(&self) -> &'static str {
        "catalog"
    }
}
