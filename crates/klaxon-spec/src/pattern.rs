//! Structural descriptions of the six tone pattern families.
//!
//! A [`TonePattern`] carries every frequency and timing value a composer
//! needs. Frequencies are in Hz, durations in seconds.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{CatalogError, CatalogResult};

/// The six pattern families a tone can belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternKind {
    /// A single steady frequency.
    Continuous,
    /// A single frequency gated on and off.
    Pulsed,
    /// Two frequencies held in turn.
    Alternating,
    /// Linear frequency sweeps.
    Swept,
    /// Three steady bursts followed by a long silence.
    PulsedBurst,
    /// Three swept bursts followed by a long silence.
    SweptBurst,
}

impl PatternKind {
    /// All families, in declaration order.
    pub const ALL: [PatternKind; 6] = [
        PatternKind::Continuous,
        PatternKind::Pulsed,
        PatternKind::Alternating,
        PatternKind::Swept,
        PatternKind::PulsedBurst,
        PatternKind::SweptBurst,
    ];

    /// Returns the snake_case name of this family.
    pub fn as_str(&self) -> &'static str {
        match self {
            PatternKind::Continuous => "continuous",
            PatternKind::Pulsed => "pulsed",
            PatternKind::Alternating => "alternating",
            PatternKind::Swept => "swept",
            PatternKind::PulsedBurst => "pulsed_burst",
            PatternKind::SweptBurst => "swept_burst",
        }
    }
}

impl fmt::Display for PatternKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PatternKind {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        PatternKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == normalized)
            .ok_or_else(|| CatalogError::UnknownPatternKind {
                name: s.to_string(),
            })
    }
}

/// How a swept tone moves through its frequency range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SweepMotion {
    /// Back-to-back one-way sweeps, `rate` repetitions per second.
    Repeating {
        /// Repetitions per second.
        rate: f64,
    },
    /// Up-down cycling, `rate` full cycles per second.
    Triangle {
        /// Full up+down cycles per second.
        rate: f64,
    },
    /// One long sweep followed by a short silence.
    Gated {
        /// Sweep duration in seconds.
        sweep: f64,
        /// Silence after each sweep in seconds.
        gap: f64,
    },
}

/// Timing of a burst cycle: `count` units separated by `gap`, then `final_gap`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BurstTiming {
    /// Duration of each burst unit.
    pub unit: f64,
    /// Silence between units (not after the last one).
    pub gap: f64,
    /// Silence after the last unit of a cycle.
    pub final_gap: f64,
    /// Units per cycle.
    pub count: u32,
}

impl BurstTiming {
    /// 0.5 s units, 0.5 s gaps, three units, 1.5 s trailing silence.
    pub const STANDARD: BurstTiming = BurstTiming {
        unit: 0.5,
        gap: 0.5,
        final_gap: 1.5,
        count: 3,
    };

    /// Nominal length of one full cycle in seconds.
    pub fn cycle_length(&self) -> f64 {
        let count = self.count as f64;
        count * self.unit + (count - 1.0).max(0.0) * self.gap + self.final_gap
    }
}

/// Frequency and timing structure of one tone.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TonePattern {
    /// Steady tone for the whole duration.
    Continuous {
        /// Tone frequency.
        frequency: f64,
    },
    /// Tone `on` seconds, silence `off` seconds, starting with the tone.
    Pulsed {
        /// Tone frequency.
        frequency: f64,
        /// Tone duration per period.
        on: f64,
        /// Silence duration per period.
        off: f64,
    },
    /// `first` for `first_hold` seconds, then `second` for `second_hold`.
    Alternating {
        /// Frequency of the leading segment.
        first: f64,
        /// Frequency of the trailing segment.
        second: f64,
        /// Duration of the leading segment.
        first_hold: f64,
        /// Duration of the trailing segment.
        second_hold: f64,
    },
    /// Linear sweep from `start` to `end`; direction follows their order.
    Swept {
        /// Frequency at the start of each sweep.
        start: f64,
        /// Frequency at the end of each sweep.
        end: f64,
        /// Repetition structure.
        motion: SweepMotion,
    },
    /// Steady-tone bursts.
    PulsedBurst {
        /// Tone frequency.
        frequency: f64,
        /// Burst timing.
        burst: BurstTiming,
    },
    /// Swept bursts.
    SweptBurst {
        /// Start frequency of each burst sweep.
        start: f64,
        /// End frequency of each burst sweep.
        end: f64,
        /// Burst timing.
        burst: BurstTiming,
    },
}

impl TonePattern {
    /// Classifies this pattern into its family.
    pub fn kind(&self) -> PatternKind {
        match self {
            TonePattern::Continuous { .. } => PatternKind::Continuous,
            TonePattern::Pulsed { .. } => PatternKind::Pulsed,
            TonePattern::Alternating { .. } => PatternKind::Alternating,
            TonePattern::Swept { .. } => PatternKind::Swept,
            TonePattern::PulsedBurst { .. } => PatternKind::PulsedBurst,
            TonePattern::SweptBurst { .. } => PatternKind::SweptBurst,
        }
    }

    /// Checks that every frequency, hold time and rate is finite and positive.
    ///
    /// Silences (`off`, gaps) may be zero.
    pub fn validate(&self) -> CatalogResult<()> {
        match *self {
            TonePattern::Continuous { frequency } => positive("frequency", frequency),
            TonePattern::Pulsed { frequency, on, off } => {
                positive("frequency", frequency)?;
                positive("on", on)?;
                non_negative("off", off)
            }
            TonePattern::Alternating {
                first,
                second,
                first_hold,
                second_hold,
            } => {
                positive("first", first)?;
                positive("second", second)?;
                positive("first_hold", first_hold)?;
                positive("second_hold", second_hold)
            }
            TonePattern::Swept { start, end, motion } => {
                positive("start", start)?;
                positive("end", end)?;
                match motion {
                    SweepMotion::Repeating { rate } | SweepMotion::Triangle { rate } => {
                        positive("rate", rate)
                    }
                    SweepMotion::Gated { sweep, gap } => {
                        positive("sweep", sweep)?;
                        non_negative("gap", gap)
                    }
                }
            }
            TonePattern::PulsedBurst { frequency, burst } => {
                positive("frequency", frequency)?;
                validate_burst(&burst)
            }
            TonePattern::SweptBurst { start, end, burst } => {
                positive("start", start)?;
                positive("end", end)?;
                validate_burst(&burst)
            }
        }
    }
}

fn validate_burst(burst: &BurstTiming) -> CatalogResult<()> {
    positive("unit", burst.unit)?;
    non_negative("gap", burst.gap)?;
    non_negative("final_gap", burst.final_gap)?;
    positive("count", burst.count as f64)
}

fn positive(name: &'static str, value: f64) -> CatalogResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(CatalogError::InvalidPatternParameter { name, value })
    }
}

fn non_negative(name: &'static str, value: f64) -> CatalogResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(CatalogError::InvalidPatternParameter { name, value })
    }
}
