//! Search command implementation
//!
//! Filters combine with AND: a tone is reported only if it matches every
//! filter given.

use anyhow::Result;
use colored::Colorize;
use klaxon_spec::{BackendError, Catalog, CatalogError, PatternKind, TonePatternSpec};
use std::process::ExitCode;

use super::json_output::{error_codes, CommandOutput, JsonError, ToneRecord};
use super::reporting::print_row;
use super::EXIT_FAILURE;

/// Search filters, each optional.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchFilters {
    /// Substring of the standard, case-insensitive
    pub standard: Option<String>,
    /// Number appearing in the frequency text
    pub frequency: Option<u32>,
    /// Pattern family name
    pub pattern: Option<String>,
    /// Substring of the description, case-insensitive
    pub description: Option<String>,
    /// DIP switch configuration
    pub dip: Option<String>,
}

impl SearchFilters {
    /// Whether no filter is set.
    pub fn is_empty(&self) -> bool {
        self.standard.is_none()
            && self.frequency.is_none()
            && self.pattern.is_none()
            && self.description.is_none()
            && self.dip.is_none()
    }
}

/// Tones matching every filter, in id order.
pub fn find(
    catalog: &Catalog,
    filters: &SearchFilters,
) -> Result<Vec<&'static TonePatternSpec>, CatalogError> {
    let mut matches: Vec<&'static TonePatternSpec> = catalog.iter().collect();

    if let Some(standard) = &filters.standard {
        retain_in(&mut matches, catalog.search_by_standard(standard));
    }
    if let Some(frequency) = filters.frequency {
        retain_in(&mut matches, catalog.search_by_frequency(frequency));
    }
    if let Some(pattern) = &filters.pattern {
        let kind: PatternKind = pattern.parse()?;
        retain_in(&mut matches, catalog.search_by_pattern(kind));
    }
    if let Some(description) = &filters.description {
        retain_in(&mut matches, catalog.search_by_description(description));
    }
    if let Some(dip) = &filters.dip {
        let selected: Vec<_> = catalog.find_by_dip_switches(dip)?.into_iter().collect();
        retain_in(&mut matches, selected);
    }

    Ok(matches)
}

fn retain_in(matches: &mut Vec<&'static TonePatternSpec>, allowed: Vec<&'static TonePatternSpec>) {
    matches.retain(|tone| allowed.iter().any(|other| other.id == tone.id));
}

/// Run the search command
///
/// # Arguments
/// * `filters` - Filters to apply
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 on success (even with no matches), 1 on invalid filters
pub fn run(filters: &SearchFilters, json_output: bool) -> Result<ExitCode> {
    if json_output {
        run_json(filters)
    } else {
        run_human(filters)
    }
}

fn run_human(filters: &SearchFilters) -> Result<ExitCode> {
    if filters.is_empty() {
        anyhow::bail!(
            "search needs at least one of --standard, --frequency, --pattern, --description, --dip"
        );
    }

    let matches = find(&Catalog::new(), filters)?;
    if matches.is_empty() {
        println!("{}", "No matching tones".yellow());
        return Ok(ExitCode::SUCCESS);
    }

    println!(
        "{}",
        format!("{} matching tone(s)", matches.len()).cyan().bold()
    );
    for tone in matches {
        print_row(tone);
    }
    Ok(ExitCode::SUCCESS)
}

fn run_json(filters: &SearchFilters) -> Result<ExitCode> {
    if filters.is_empty() {
        let error = JsonError::new(error_codes::NO_FILTER, "no search filter given")
            .with_suggestion("pass --standard, --frequency, --pattern, --description or --dip");
        CommandOutput::<Vec<ToneRecord>>::failure(vec![error]).print()?;
        return Ok(ExitCode::from(EXIT_FAILURE));
    }

    match find(&Catalog::new(), filters) {
        Ok(matches) => {
            let records: Vec<ToneRecord> = matches.into_iter().map(ToneRecord::from).collect();
            CommandOutput::success(records).print()?;
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            let mut error = JsonError::from_backend(&e);
            if matches!(e, CatalogError::UnknownPatternKind { .. }) {
                let names: Vec<&str> = PatternKind::ALL.iter().map(PatternKind::as_str).collect();
                error = error.with_suggestion(format!("expected one of: {}", names.join(", ")));
            }
            tracing::debug!(code = e.code(), "search rejected");
            CommandOutput::<Vec<ToneRecord>>::failure(vec![error]).print()?;
            Ok(ExitCode::from(EXIT_FAILURE))
        }
    }
}
