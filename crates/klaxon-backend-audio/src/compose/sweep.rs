//! Rate-specified and triangle sweeps.
//!
//! Both thread a [`PhaseChain`] through consecutive sweeps so that each
//! repetition starts at the phase where the previous one stopped. They differ
//! in how the last, partial repetition is produced:
//!
//! - [`repeating`] keeps the repetition *rate*: a partial repetition is a
//!   prefix of a full-length sweep.
//! - [`triangle`] keeps the frequency *slope*: a partial half-cycle is a
//!   shorter sweep whose end frequency is scaled by the elapsed fraction.

use super::Timeline;
use crate::segment::{SegmentGenerator, Sweep};

/// Phase carried across sweeps that form one continuous physical sweep.
///
/// Starts at zero for every render and is dropped with the composer.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PhaseChain {
    phase: f64,
}

impl PhaseChain {
    /// A chain starting at phase zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current phase in radians.
    pub fn phase(&self) -> f64 {
        self.phase
    }

    /// Renders the next sweep of the chain and advances the phase.
    pub fn advance(
        &mut self,
        segments: &SegmentGenerator,
        start: f64,
        end: f64,
        frames: usize,
    ) -> Sweep {
        self.advance_prefix(segments, start, end, frames, frames)
    }

    /// Renders the first `take` frames of the next `frames`-long sweep.
    pub fn advance_prefix(
        &mut self,
        segments: &SegmentGenerator,
        start: f64,
        end: f64,
        frames: usize,
        take: usize,
    ) -> Sweep {
        let sweep = segments.sweep_prefix(start, end, frames, take, self.phase);
        self.phase = sweep.final_phase;
        sweep
    }
}

/// Back-to-back sweeps from `start` to `end`, `rate` repetitions per second.
///
/// Direction follows the order of `start` and `end`. A repetition that does
/// not fit keeps the full-length slope and is cut at the budget.
///
/// Each repetition continues from the previous one's final phase. Sirens
/// rendered this way have no click at repetition boundaries, but are not
/// bit-identical to renders that restart every repetition at phase zero.
pub fn repeating(
    segments: &SegmentGenerator,
    start: f64,
    end: f64,
    rate: f64,
    frames: usize,
) -> Vec<i16> {
    let repetition = segments.frames_for(1.0 / rate).max(1);
    let mut chain = PhaseChain::new();
    let mut timeline = Timeline::new(frames);

    while !timeline.is_full() {
        let take = repetition.min(timeline.remaining());
        let sweep = chain.advance_prefix(segments, start, end, repetition, take);
        timeline.push(&sweep.samples);
    }

    timeline.into_samples()
}

/// Up-down cycling between `low` and `high`, `rate` full cycles per second.
///
/// Each half-cycle lasts `1 / (2 * rate)` seconds and crosses the full range.
/// When the budget ends inside a half-cycle, that half-cycle is rendered over
/// the remaining frames only, ending at
/// `from + (to - from) * remaining / half_cycle`.
pub fn triangle(
    segments: &SegmentGenerator,
    low: f64,
    high: f64,
    rate: f64,
    frames: usize,
) -> Vec<i16> {
    let half_cycle = 1.0 / (2.0 * rate);
    let half_frames = segments.frames_for(half_cycle).max(1);
    let mut chain = PhaseChain::new();
    let mut timeline = Timeline::new(frames);
    let mut rising = true;

    while !timeline.is_full() {
        let (from, to) = if rising { (low, high) } else { (high, low) };
        let remaining = timeline.remaining();

        if remaining >= half_frames {
            timeline.push(&chain.advance(segments, from, to, half_frames).samples);
        } else {
            let progress = segments.seconds_for(remaining) / half_cycle;
            let partial_end = from + (to - from) * progress;
            timeline.push(&chain.advance(segments, from, partial_end, remaining).samples);
        }

        rising = !rising;
    }

    timeline.into_samples()
}
