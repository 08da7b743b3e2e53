//! Burst cycles: `count` units separated by short gaps, then a long silence.

use klaxon_spec::BurstTiming;
use tracing::trace;

use super::Timeline;
use crate::segment::SegmentGenerator;

/// Repeats burst cycles built from `unit` until `frames` are filled.
///
/// One cycle is `unit, gap, unit, gap, unit, final_gap` for the standard
/// three-unit timing. Cycles are emitted in batches of
/// `max(1, remaining / cycle_length)` before the budget is checked again; the
/// trailing silence of the last cycle (or any other unit) is cut at the
/// budget.
pub fn cycles(
    segments: &SegmentGenerator,
    unit: &[i16],
    timing: &BurstTiming,
    frames: usize,
) -> Vec<i16> {
    let gap_frames = segments.frames_for(timing.gap);
    let final_gap_frames = segments.frames_for(timing.final_gap);
    let cycle_frames = segments.frames_for(timing.cycle_length()).max(1);
    let mut timeline = Timeline::new(frames);

    while !timeline.is_full() {
        let batch = (timeline.remaining() / cycle_frames).max(1);
        trace!(batch, remaining = timeline.remaining(), "burst batch");

        for _ in 0..batch {
            if timeline.is_full() {
                break;
            }
            let written = emit_cycle(&mut timeline, unit, timing.count, gap_frames, final_gap_frames);
            if written == 0 {
                // Degenerate timing shorter than one frame.
                timeline.push_silence(timeline.remaining());
            }
        }
    }

    timeline.into_samples()
}

fn emit_cycle(
    timeline: &mut Timeline,
    unit: &[i16],
    count: u32,
    gap_frames: usize,
    final_gap_frames: usize,
) -> usize {
    let mut written = 0;
    for index in 0..count {
        written += timeline.push(unit);
        if index + 1 < count {
            written += timeline.push_silence(gap_frames);
        }
    }
    written + timeline.push_silence(final_gap_frames)
}
