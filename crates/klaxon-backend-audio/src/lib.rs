//! Klaxon Audio Backend
//!
//! Sample-accurate synthesis of the 32 catalog alert tones into 16-bit PCM.
//!
//! # Overview
//!
//! A render takes a tone id, a duration and output parameters and produces
//! exactly `round(duration * sample_rate)` mono samples. Tones are built from
//! three primitives:
//!
//! - **Sine** - a steady tone at one frequency
//! - **Silence** - zeros
//! - **Sweep** - a linear frequency ramp with phase carried across repeats
//!
//! which the composers tile into the pattern families of the catalog
//! (continuous, pulsed, alternating, swept, pulsed burst, swept burst).
//!
//! # Determinism
//!
//! Rendering is a pure function of its inputs. The same tone, duration,
//! sample rate and amplitude always yield bit-identical samples, and the
//! BLAKE3 hash of the PCM data can be used to compare renders.
//!
//! # Example
//!
//! ```
//! use klaxon_backend_audio::{EngineConfig, SynthesisEngine};
//!
//! let engine = SynthesisEngine::builtin(EngineConfig::default()).unwrap();
//! let waveform = engine.render(11, 4.0).unwrap();
//! assert_eq!(waveform.len(), 176_400);
//!
//! let wav = waveform.to_wav(true).unwrap();
//! assert!(wav.is_stereo);
//! assert_eq!(wav.pcm_hash.len(), 64);
//! ```
//!
//! # Crate Structure
//!
//! - [`engine`] - Tone resolution and render entry points
//! - [`segment`] - Sine, silence and sweep generators
//! - [`compose`] - Pattern composers with a shared truncation policy
//! - [`waveform`] - Rendered PCM buffer
//! - [`wav`] - Deterministic WAV file writer

pub mod compose;
pub mod engine;
pub mod error;
pub mod segment;
pub mod waveform;
pub mod wav;

pub use engine::{
    render, EngineConfig, SynthesisEngine, DEFAULT_AMPLITUDE, DEFAULT_SAMPLE_RATE, MAX_RENDER_FRAMES,
};
pub use error::{SynthError, SynthResult};
pub use segment::{SegmentGenerator, Sweep, PCM_FULL_SCALE};
pub use waveform::Waveform;
pub use wav::{compute_pcm_hash, extract_pcm_data, WavResult, WavWriter};
