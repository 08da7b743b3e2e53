//! Extraction of a primary frequency from descriptive text.

use std::sync::OnceLock;

use regex::Regex;

use crate::error::{CatalogError, CatalogResult};

/// Frequency used when descriptive text names no frequency.
pub const FALLBACK_FREQUENCY_HZ: f64 = 1000.0;

/// First run of digits immediately followed by the unit marker.
const PRIMARY_FREQUENCY_PATTERN: &str = r"(\d+)Hz";

static PRIMARY_FREQUENCY_REGEX: OnceLock<Regex> = OnceLock::new();

fn primary_frequency_regex() -> &'static Regex {
    PRIMARY_FREQUENCY_REGEX
        .get_or_init(|| Regex::new(PRIMARY_FREQUENCY_PATTERN).expect("invalid regex pattern"))
}

/// Returns the first integer immediately followed by `Hz` in `text`.
///
/// # Example
/// ```
/// use klaxon_spec::frequency::parse_primary_frequency;
///
/// assert_eq!(parse_primary_frequency("800/1000Hz").unwrap(), 1000.0);
/// assert!(parse_primary_frequency("siren").is_err());
/// ```
pub fn parse_primary_frequency(text: &str) -> CatalogResult<f64> {
    primary_frequency_regex()
        .captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|digits| digits.as_str().parse::<u32>().ok())
        .map(f64::from)
        .ok_or_else(|| CatalogError::MalformedFrequencyText {
            text: text.to_string(),
        })
}

/// Like [`parse_primary_frequency`], substituting [`FALLBACK_FREQUENCY_HZ`].
pub fn primary_frequency_or_default(text: &str) -> f64 {
    parse_primary_frequency(text).unwrap_or(FALLBACK_FREQUENCY_HZ)
}
