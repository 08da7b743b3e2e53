//! Human-readable tone formatting shared by list, show and search.

use colored::Colorize;
use klaxon_spec::{SweepMotion, TonePattern, TonePatternSpec};

/// One-line summary of a pattern's structure.
pub(super) fn describe_pattern(pattern: &TonePattern) -> String {
    match *pattern {
        TonePattern::Continuous { frequency } => format!("continuous {frequency} Hz"),
        TonePattern::Pulsed { frequency, on, off } => {
            format!("pulsed {frequency} Hz, {on} s on / {off} s off")
        }
        TonePattern::Alternating {
            first,
            second,
            first_hold,
            second_hold,
        } => format!("alternating {first} Hz ({first_hold} s) / {second} Hz ({second_hold} s)"),
        TonePattern::Swept { start, end, motion } => match motion {
            SweepMotion::Repeating { rate } => {
                format!("sweep {start} -> {end} Hz, {rate} per second")
            }
            SweepMotion::Triangle { rate } => {
                format!("sweep {start} <-> {end} Hz, {rate} cycles per second")
            }
            SweepMotion::Gated { sweep, gap } => {
                format!("sweep {start} -> {end} Hz over {sweep} s, {gap} s off")
            }
        },
        TonePattern::PulsedBurst { frequency, burst } => format!(
            "{} x {} s bursts of {frequency} Hz, {} s apart, {} s pause",
            burst.count, burst.unit, burst.gap, burst.final_gap
        ),
        TonePattern::SweptBurst { start, end, burst } => format!(
            "{} x {} s sweeps {start} -> {end} Hz, {} s apart, {} s pause",
            burst.count, burst.unit, burst.gap, burst.final_gap
        ),
    }
}

/// Prints a compact row for tables.
pub(super) fn print_row(tone: &TonePatternSpec) {
    let standard = tone
        .standard
        .map(|s| format!(" [{s}]"))
        .unwrap_or_default();
    println!(
        "{:>3}  {}  {:<24} {}{}",
        tone.id.to_string().cyan(),
        tone.dip_switches.dimmed(),
        tone.frequency,
        tone.description,
        standard.yellow()
    );
}

/// Prints every field of one tone.
pub(super) fn print_detail(tone: &TonePatternSpec) {
    println!("{} {}", "Tone".cyan().bold(), tone.id.to_string().bold());
    println!("  {} {}", "Description:".dimmed(), tone.description);
    println!("  {} {}", "Frequency:".dimmed(), tone.frequency);
    println!("  {} {}", "DIP switches:".dimmed(), tone.dip_switches);
    if let Some(standard) = tone.standard {
        println!("  {} {}", "Standard:".dimmed(), standard);
    }
    match &tone.pattern {
        Some(pattern) => {
            println!("  {} {}", "Kind:".dimmed(), pattern.kind());
            println!("  {} {}", "Pattern:".dimmed(), describe_pattern(pattern));
        }
        None => println!("  {} {}", "Pattern:".dimmed(), "plain tone".italic()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use klaxon_spec::Catalog;
    use pretty_assertions::assert_eq;

    fn describe(tone_id: u8) -> String {
        let tone = Catalog::new().get(tone_id).unwrap();
        describe_pattern(tone.pattern.as_ref().unwrap())
    }

    #[test]
    fn test_describe_each_family() {
        assert_eq!(describe(1), "continuous 970 Hz");
        assert_eq!(describe(4), "pulsed 970 Hz, 1 s on / 1 s off");
        assert_eq!(describe(6), "alternating 554 Hz (0.1 s) / 440 Hz (0.4 s)");
        assert_eq!(describe(13), "sweep 1200 -> 500 Hz, 1 per second");
        assert_eq!(describe(25), "sweep 500 <-> 1200 Hz, 0.33 cycles per second");
        assert_eq!(describe(7), "sweep 500 -> 1200 Hz over 3.5 s, 0.5 s off");
        assert_eq!(
            describe(12),
            "3 x 0.5 s bursts of 2850 Hz, 0.5 s apart, 1.5 s pause"
        );
        assert_eq!(
            describe(9),
            "3 x 0.5 s sweeps 1000 -> 2500 Hz, 0.5 s apart, 1.5 s pause"
        );
    }
}
