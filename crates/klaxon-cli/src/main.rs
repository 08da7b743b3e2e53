//! Klaxon CLI - browse the alert tone catalog and render tones to WAV
//!
//! This binary lists, shows and searches the 32 catalog tones, renders them
//! to deterministic WAV files, and prints PCM hashes for comparison.

use clap::{ArgAction, Parser, Subcommand};
use std::process::ExitCode;

use klaxon_cli::commands::{self, render::RenderArgs, search::SearchFilters};
use klaxon_cli::logging;

/// Klaxon - Alarm Sounder Tone Synthesis
#[derive(Parser)]
#[command(name = "klaxon")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every tone in the catalog
    List {
        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Show one tone, including its pattern parameters
    Show {
        /// Tone id (1-32)
        #[arg(short, long)]
        tone: u8,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Search the catalog; all given filters must match
    Search {
        /// Standard name, case-insensitive substring (e.g. "AS1670")
        #[arg(long)]
        standard: Option<String>,

        /// Frequency in Hz appearing in the tone's frequency text
        #[arg(long)]
        frequency: Option<u32>,

        /// Pattern family (continuous, pulsed, alternating, swept, pulsed_burst, swept_burst)
        #[arg(long)]
        pattern: Option<String>,

        /// Description text, case-insensitive substring
        #[arg(long)]
        description: Option<String>,

        /// DIP switch configuration (e.g. "O-I-O-I-O")
        #[arg(long)]
        dip: Option<String>,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Render a tone to a WAV file
    Render {
        /// Tone id (1-32)
        #[arg(short, long)]
        tone: u8,

        /// Duration in seconds (default: 5, or the config file's value)
        #[arg(short, long)]
        duration: Option<f64>,

        /// Output WAV path (default: tone_NN.wav)
        #[arg(short, long)]
        output: Option<String>,

        /// Sample rate in Hz
        #[arg(long)]
        sample_rate: Option<u32>,

        /// Linear amplitude in (0, 1]
        #[arg(long)]
        amplitude: Option<f64>,

        /// Write one channel instead of two
        #[arg(long)]
        mono: bool,

        /// Path to render config file (JSON)
        #[arg(long)]
        config: Option<String>,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Print the PCM hash of a rendered tone without writing a file
    Hash {
        /// Tone id (1-32)
        #[arg(short, long)]
        tone: u8,

        /// Duration in seconds (default: 5, or the config file's value)
        #[arg(short, long)]
        duration: Option<f64>,

        /// Path to render config file (JSON)
        #[arg(long)]
        config: Option<String>,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = match cli.command {
        Commands::List { json } => commands::list::run(json),
        Commands::Show { tone, json } => commands::show::run(tone, json),
        Commands::Search {
            standard,
            frequency,
            pattern,
            description,
            dip,
            json,
        } => commands::search::run(
            &SearchFilters {
                standard,
                frequency,
                pattern,
                description,
                dip,
            },
            json,
        ),
        Commands::Render {
            tone,
            duration,
            output,
            sample_rate,
            amplitude,
            mono,
            config,
            json,
        } => commands::render::run(
            &RenderArgs {
                tone,
                duration,
                output,
                sample_rate,
                amplitude,
                mono,
                config,
            },
            json,
        ),
        Commands::Hash {
            tone,
            duration,
            config,
            json,
        } => commands::hash::run(tone, duration, config.as_deref(), json),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(commands::exit_status(&e))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_list() {
        let cli = Cli::try_parse_from(["klaxon", "list", "--json"]).unwrap();
        assert_eq!(cli.verbose, 0);
        match cli.command {
            Commands::List { json } => assert!(json),
            _ => panic!("expected list command"),
        }
    }

    #[test]
    fn test_cli_parses_show() {
        let cli = Cli::try_parse_from(["klaxon", "show", "--tone", "12"]).unwrap();
        match cli.command {
            Commands::Show { tone, json } => {
                assert_eq!(tone, 12);
                assert!(!json);
            }
            _ => panic!("expected show command"),
        }
    }

    #[test]
    fn test_cli_rejects_invalid_tone() {
        assert!(Cli::try_parse_from(["klaxon", "show", "--tone", "300"]).is_err());
        assert!(Cli::try_parse_from(["klaxon", "show"]).is_err());
    }

    #[test]
    fn test_cli_parses_search_filters() {
        let cli = Cli::try_parse_from([
            "klaxon",
            "search",
            "--standard",
            "AS1670",
            "--pattern",
            "swept_burst",
            "--frequency",
            "500",
        ])
        .unwrap();
        match cli.command {
            Commands::Search {
                standard,
                frequency,
                pattern,
                description,
                dip,
                json,
            } => {
                assert_eq!(standard.as_deref(), Some("AS1670"));
                assert_eq!(frequency, Some(500));
                assert_eq!(pattern.as_deref(), Some("swept_burst"));
                assert!(description.is_none());
                assert!(dip.is_none());
                assert!(!json);
            }
            _ => panic!("expected search command"),
        }
    }

    #[test]
    fn test_cli_parses_render() {
        let cli = Cli::try_parse_from([
            "klaxon",
            "-vv",
            "render",
            "-t",
            "25",
            "-d",
            "7.5",
            "-o",
            "siren.wav",
            "--sample-rate",
            "48000",
            "--amplitude",
            "0.8",
            "--mono",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::Render {
                tone,
                duration,
                output,
                sample_rate,
                amplitude,
                mono,
                config,
                json,
            } => {
                assert_eq!(tone, 25);
                assert_eq!(duration, Some(7.5));
                assert_eq!(output.as_deref(), Some("siren.wav"));
                assert_eq!(sample_rate, Some(48_000));
                assert_eq!(amplitude, Some(0.8));
                assert!(mono);
                assert!(config.is_none());
                assert!(!json);
            }
            _ => panic!("expected render command"),
        }
    }

    #[test]
    fn test_cli_parses_hash_with_trailing_verbose() {
        let cli = Cli::try_parse_from(["klaxon", "hash", "--tone", "9", "--json", "-v"]).unwrap();
        assert_eq!(cli.verbose, 1);
        match cli.command {
            Commands::Hash {
                tone,
                duration,
                config,
                json,
            } => {
                assert_eq!(tone, 9);
                assert!(duration.is_none());
                assert!(config.is_none());
                assert!(json);
            }
            _ => panic!("expected hash command"),
        }
    }
}
