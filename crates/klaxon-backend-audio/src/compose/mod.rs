//! Pattern composers: tile segments until the requested length is reached.
//!
//! All composers share one truncation policy: the output never overshoots the
//! frame budget. The final tiled unit is cut at exactly the remaining number
//! of frames, whether it is a tone, a sweep or a silence.
//!
//! - [`tiling`] - pulsed, alternating and gated-sweep patterns
//! - [`sweep`] - rate-specified and triangle sweeps
//! - [`burst`] - three-unit burst cycles

pub mod burst;
pub mod sweep;
pub mod tiling;

use klaxon_spec::{SweepMotion, TonePattern};

use crate::segment::SegmentGenerator;

/// Output buffer with a fixed frame budget.
///
/// Pushes beyond the budget are cut, so a composer can emit whole units and
/// let the timeline apply the truncation policy.
#[derive(Debug)]
pub struct Timeline {
    samples: Vec<i16>,
    budget: usize,
}

impl Timeline {
    /// Creates an empty timeline that accepts `budget` frames.
    pub fn new(budget: usize) -> Self {
        Self {
            samples: Vec::with_capacity(budget),
            budget,
        }
    }

    /// Frames still accepted.
    pub fn remaining(&self) -> usize {
        self.budget - self.samples.len()
    }

    /// Whether the budget is exhausted.
    pub fn is_full(&self) -> bool {
        self.samples.len() >= self.budget
    }

    /// Appends as much of `segment` as fits. Returns the frames written.
    pub fn push(&mut self, segment: &[i16]) -> usize {
        let take = segment.len().min(self.remaining());
        self.samples.extend_from_slice(&segment[..take]);
        take
    }

    /// Appends up to `frames` zeros. Returns the frames written.
    pub fn push_silence(&mut self, frames: usize) -> usize {
        let take = frames.min(self.remaining());
        self.samples.resize(self.samples.len() + take, 0);
        take
    }

    /// Consumes the timeline, returning its samples.
    pub fn into_samples(self) -> Vec<i16> {
        self.samples
    }
}

/// Renders `pattern` into exactly `frames` samples.
pub fn compose(pattern: &TonePattern, frames: usize, segments: &SegmentGenerator) -> Vec<i16> {
    match *pattern {
        TonePattern::Continuous { frequency } => segments.sine_frames(frequency, frames),
        TonePattern::Pulsed { frequency, on, off } => {
            tiling::pulsed(segments, frequency, on, off, frames)
        }
        TonePattern::Alternating {
            first,
            second,
            first_hold,
            second_hold,
        } => tiling::alternating(segments, (first, first_hold), (second, second_hold), frames),
        TonePattern::Swept { start, end, motion } => match motion {
            SweepMotion::Repeating { rate } => sweep::repeating(segments, start, end, rate, frames),
            SweepMotion::Triangle { rate } => sweep::triangle(segments, start, end, rate, frames),
            SweepMotion::Gated { sweep, gap } => {
                tiling::gated_sweep(segments, start, end, sweep, gap, frames)
            }
        },
        TonePattern::PulsedBurst { frequency, burst } => {
            let unit_frames = segments.frames_for(burst.unit).min(frames);
            let unit = segments.sine_frames(frequency, unit_frames);
            burst::cycles(segments, &unit, &burst, frames)
        }
        TonePattern::SweptBurst { start, end, burst } => {
            let unit_frames = segments.frames_for(burst.unit);
            let unit = segments
                .sweep_prefix(start, end, unit_frames, frames, 0.0)
                .samples;
            burst::cycles(segments, &unit, &burst, frames)
        }
    }
}
