//! Two-unit tiling: pulsed tones, alternating tones and gated sweeps.

use super::Timeline;
use crate::segment::SegmentGenerator;

/// Tone for `on` seconds, silence for `off` seconds, starting with the tone.
///
/// The last unit is cut at the budget, so a render can end mid-tone or
/// mid-silence.
pub fn pulsed(
    segments: &SegmentGenerator,
    frequency: f64,
    on: f64,
    off: f64,
    frames: usize,
) -> Vec<i16> {
    let on_frames = segments.frames_for(on).max(1);
    let off_frames = segments.frames_for(off);
    let mut timeline = Timeline::new(frames);

    while !timeline.is_full() {
        let take = on_frames.min(timeline.remaining());
        timeline.push(&segments.sine_frames(frequency, take));
        timeline.push_silence(off_frames);
    }

    timeline.into_samples()
}

/// `first` then `second`, each `(frequency, hold)`, repeating.
///
/// Each segment restarts at phase zero.
pub fn alternating(
    segments: &SegmentGenerator,
    first: (f64, f64),
    second: (f64, f64),
    frames: usize,
) -> Vec<i16> {
    let units = [first, second].map(|(frequency, hold)| (frequency, segments.frames_for(hold).max(1)));
    let mut timeline = Timeline::new(frames);

    for &(frequency, unit_frames) in units.iter().cycle() {
        if timeline.is_full() {
            break;
        }
        let take = unit_frames.min(timeline.remaining());
        timeline.push(&segments.sine_frames(frequency, take));
    }

    timeline.into_samples()
}

/// A `sweep`-second chirp from `start` to `end` followed by `gap` seconds of
/// silence, repeating.
///
/// A cut sweep is a prefix of the full-length sweep, so its frequency
/// trajectory up to the cut matches an uninterrupted one.
pub fn gated_sweep(
    segments: &SegmentGenerator,
    start: f64,
    end: f64,
    sweep: f64,
    gap: f64,
    frames: usize,
) -> Vec<i16> {
    let sweep_frames = segments.frames_for(sweep).max(1);
    let chirp = segments
        .sweep_prefix(start, end, sweep_frames, frames, 0.0)
        .samples;
    let gap_frames = segments.frames_for(gap);
    let mut timeline = Timeline::new(frames);

    while !timeline.is_full() {
        timeline.push(&chirp);
        timeline.push_silence(gap_frames);
    }

    timeline.into_samples()
}
