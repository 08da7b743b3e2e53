//! Segment generators: steady sine, silence, and linear sweep.
//!
//! Every generator is a pure function of its arguments and the generator's
//! fixed sample rate and amplitude. Sample `k` of a segment sits at
//! `t = k / sample_rate`, and a segment of `duration` seconds holds
//! `round(duration * sample_rate)` frames.
//!
//! Samples are scaled by `amplitude * 32767` and truncated toward zero, so
//! every value lies in `[-amplitude * 32767, amplitude * 32767]`.

use std::f64::consts::TAU;

/// Full-scale positive value of a 16-bit sample.
pub const PCM_FULL_SCALE: f64 = 32767.0;

/// Output of a sweep: its samples plus the phase of the last sample.
#[derive(Debug, Clone, PartialEq)]
pub struct Sweep {
    /// Rendered samples.
    pub samples: Vec<i16>,
    /// Instantaneous phase (radians) of the last sample, or the initial phase
    /// if the sweep is empty. Pass it as the next sweep's initial phase to
    /// continue without a discontinuity.
    pub final_phase: f64,
}

/// Produces individual waveform segments at a fixed rate and amplitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentGenerator {
    sample_rate: u32,
    amplitude: f64,
}

impl SegmentGenerator {
    /// Creates a generator. Callers validate `sample_rate` and `amplitude`.
    pub fn new(sample_rate: u32, amplitude: f64) -> Self {
        Self {
            sample_rate,
            amplitude,
        }
    }

    /// Number of frames spanned by `duration` seconds.
    pub fn frames_for(&self, duration: f64) -> usize {
        if duration.is_finite() && duration > 0.0 {
            (duration * self.sample_rate as f64).round() as usize
        } else {
            0
        }
    }

    /// Duration in seconds of `frames` frames.
    pub fn seconds_for(&self, frames: usize) -> f64 {
        frames as f64 / self.sample_rate as f64
    }

    /// `amplitude * sin(2 pi freq t)` for `duration` seconds.
    pub fn sine(&self, freq: f64, duration: f64) -> Vec<i16> {
        self.sine_frames(freq, self.frames_for(duration))
    }

    /// A sine of exactly `frames` frames, starting at phase zero.
    pub fn sine_frames(&self, freq: f64, frames: usize) -> Vec<i16> {
        let step = TAU * freq / self.sample_rate as f64;
        (0..frames)
            .map(|k| self.quantize((step * k as f64).sin()))
            .collect()
    }

    /// `duration` seconds of zeros.
    pub fn silence(&self, duration: f64) -> Vec<i16> {
        vec![0; self.frames_for(duration)]
    }

    /// Linear chirp from `start_freq` to `end_freq` over `duration` seconds.
    pub fn sweep(&self, start_freq: f64, end_freq: f64, duration: f64, initial_phase: f64) -> Sweep {
        self.sweep_frames(start_freq, end_freq, self.frames_for(duration), initial_phase)
    }

    /// Linear chirp over exactly `frames` frames.
    ///
    /// The instantaneous frequency of sample `k` is
    /// `start + (end - start) * k / frames`, and the phase is the running sum
    /// `initial_phase + (2 pi / sample_rate) * sum(f[0..=k])`. Summing rather
    /// than evaluating a closed-form chirp makes chained sweeps continue
    /// exactly where the previous one stopped.
    pub fn sweep_frames(
        &self,
        start_freq: f64,
        end_freq: f64,
        frames: usize,
        initial_phase: f64,
    ) -> Sweep {
        self.sweep_prefix(start_freq, end_freq, frames, frames, initial_phase)
    }

    /// The first `take` frames of a `frames`-long chirp.
    ///
    /// The slope is that of the full sweep, so the samples equal the head of
    /// [`sweep_frames`](Self::sweep_frames) without rendering the rest.
    pub fn sweep_prefix(
        &self,
        start_freq: f64,
        end_freq: f64,
        frames: usize,
        take: usize,
        initial_phase: f64,
    ) -> Sweep {
        let take = take.min(frames);
        let mut samples = Vec::with_capacity(take);
        let slope = if frames > 0 {
            (end_freq - start_freq) / frames as f64
        } else {
            0.0
        };
        let radians_per_hz = TAU / self.sample_rate as f64;

        let mut freq_sum = 0.0;
        let mut phase = initial_phase;
        for k in 0..take {
            freq_sum += start_freq + slope * k as f64;
            phase = initial_phase + radians_per_hz * freq_sum;
            samples.push(self.quantize(phase.sin()));
        }

        Sweep {
            samples,
            final_phase: phase,
        }
    }

    /// Scales a unit-range value to a 16-bit sample, truncating toward zero.
    fn quantize(&self, value: f64) -> i16 {
        (value * self.amplitude * PCM_FULL_SCALE) as i16
    }
}
