//! List command implementation

use anyhow::Result;
use colored::Colorize;
use klaxon_spec::Catalog;
use std::process::ExitCode;

use super::json_output::{CommandOutput, ToneRecord};
use super::reporting::print_row;

/// Run the list command
///
/// # Arguments
/// * `json_output` - Whether to output machine-readable JSON
pub fn run(json_output: bool) -> Result<ExitCode> {
    let catalog = Catalog::new();

    if json_output {
        let records: Vec<ToneRecord> = catalog.iter().map(ToneRecord::from).collect();
        CommandOutput::success(records).print()?;
        return Ok(ExitCode::SUCCESS);
    }

    println!("{}", format!("{} tones", catalog.len()).cyan().bold());
    for tone in catalog.iter() {
        print_row(tone);
    }

    Ok(ExitCode::SUCCESS)
}
