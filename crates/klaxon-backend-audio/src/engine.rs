//! Tone rendering entry point.
//!
//! The engine resolves a tone id against a [`ToneCatalog`], derives the exact
//! frame count for the requested duration, and hands the tone's pattern to the
//! matching composer. Every render is independent: no state survives between
//! calls, so repeated renders with the same inputs are bit-identical.

use klaxon_spec::{primary_frequency_or_default, Catalog, ToneCatalog, TonePattern};
use tracing::{debug, warn};

use crate::compose::compose;
use crate::error::{SynthError, SynthResult};
use crate::segment::SegmentGenerator;
use crate::wav::MAX_PCM_BYTES;
use crate::waveform::Waveform;

/// Default output sample rate in Hz.
pub const DEFAULT_SAMPLE_RATE: u32 = 44_100;
/// Default linear amplitude.
pub const DEFAULT_AMPLITUDE: f64 = 0.5;
/// Longest render in frames: the most a duplicated-stereo 16-bit WAV can hold.
pub const MAX_RENDER_FRAMES: usize = MAX_PCM_BYTES / 4;

/// Output parameters shared by every render of an engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineConfig {
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Linear amplitude in (0, 1].
    pub amplitude: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            sample_rate: DEFAULT_SAMPLE_RATE,
            amplitude: DEFAULT_AMPLITUDE,
        }
    }
}

impl EngineConfig {
    /// Checks that the sample rate is non-zero and the amplitude lies in
    /// (0, 1].
    pub fn validate(&self) -> SynthResult<()> {
        if self.sample_rate == 0 {
            return Err(SynthError::InvalidSampleRate {
                rate: self.sample_rate,
            });
        }
        if !(self.amplitude > 0.0 && self.amplitude <= 1.0) {
            return Err(SynthError::InvalidAmplitude {
                amplitude: self.amplitude,
            });
        }
        Ok(())
    }
}

/// Renders catalog tones to PCM.
#[derive(Debug, Clone)]
pub struct SynthesisEngine<C: ToneCatalog = Catalog> {
    catalog: C,
    config: EngineConfig,
}

impl SynthesisEngine<Catalog> {
    /// An engine over the built-in 32-tone catalog.
    pub fn builtin(config: EngineConfig) -> SynthResult<Self> {
        Self::new(Catalog, config)
    }
}

impl<C: ToneCatalog> SynthesisEngine<C> {
    /// Creates an engine over `catalog`, validating `config`.
    pub fn new(catalog: C, config: EngineConfig) -> SynthResult<Self> {
        config.validate()?;
        Ok(Self { catalog, config })
    }

    /// The engine's output parameters.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The catalog tones are resolved against.
    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    /// Renders `duration` seconds of tone `tone_id`.
    ///
    /// The result holds exactly `round(duration * sample_rate)` samples.
    ///
    /// # Errors
    ///
    /// [`SynthError::UnknownTone`] if the catalog has no such tone, then
    /// [`SynthError::InvalidDuration`] if `duration` is not finite and
    /// positive or spans more than [`MAX_RENDER_FRAMES`], then
    /// [`SynthError::InvalidPattern`] if the entry's pattern parameters are
    /// out of range.
    pub fn render(&self, tone_id: u8, duration: f64) -> SynthResult<Waveform> {
        let tone = self
            .catalog
            .resolve(tone_id)
            .ok_or(SynthError::UnknownTone { tone_id })?;

        if !(duration.is_finite() && duration > 0.0) {
            return Err(SynthError::InvalidDuration { duration });
        }
        if (duration * self.config.sample_rate as f64).round() > MAX_RENDER_FRAMES as f64 {
            return Err(SynthError::InvalidDuration { duration });
        }

        let segments = SegmentGenerator::new(self.config.sample_rate, self.config.amplitude);
        let total = segments.frames_for(duration);

        let pattern = match tone.pattern {
            Some(pattern) => {
                pattern
                    .validate()
                    .map_err(|source| SynthError::InvalidPattern { tone_id, source })?;
                pattern
            }
            None => {
                let frequency = primary_frequency_or_default(tone.frequency);
                warn!(
                    tone_id,
                    frequency,
                    text = tone.frequency,
                    "tone has no pattern, rendering a plain tone"
                );
                TonePattern::Continuous { frequency }
            }
        };

        debug!(
            tone_id,
            kind = %pattern.kind(),
            frames = total,
            sample_rate = self.config.sample_rate,
            "rendering tone"
        );

        let mut samples = compose(&pattern, total, &segments);
        samples.truncate(total);

        Ok(Waveform::new(samples, self.config.sample_rate))
    }
}

/// Renders a built-in tone with explicit output parameters.
///
/// Sample rate and amplitude are checked before the tone is resolved.
///
/// ```
/// let waveform = klaxon_backend_audio::render(1, 0.25, 8_000, 0.5).unwrap();
/// assert_eq!(waveform.len(), 2_000);
/// ```
pub fn render(tone_id: u8, duration: f64, sample_rate: u32, amplitude: f64) -> SynthResult<Waveform> {
    SynthesisEngine::builtin(EngineConfig {
        sample_rate,
        amplitude,
    })?
    .render(tone_id, duration)
}
