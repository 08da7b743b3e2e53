//! Rendered mono PCM buffer.

use std::io::Write;

use crate::error::SynthResult;
use crate::wav::{duplicate_to_stereo, pcm16_bytes, write_wav, WavFormat, WavResult};

/// 16-bit signed mono samples at a fixed sample rate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Waveform {
    samples: Vec<i16>,
    sample_rate: u32,
}

impl Waveform {
    /// Wraps rendered samples.
    pub fn new(samples: Vec<i16>, sample_rate: u32) -> Self {
        Self {
            samples,
            sample_rate,
        }
    }

    /// The samples.
    pub fn samples(&self) -> &[i16] {
        &self.samples
    }

    /// Consumes the waveform, returning its samples.
    pub fn into_samples(self) -> Vec<i16> {
        self.samples
    }

    /// Sample rate in Hz.
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Number of frames.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether the buffer holds no frames.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Length in seconds.
    pub fn duration_seconds(&self) -> f64 {
        self.samples.len() as f64 / self.sample_rate as f64
    }

    /// Largest absolute sample value.
    pub fn peak(&self) -> u16 {
        self.samples
            .iter()
            .map(|s| s.unsigned_abs())
            .max()
            .unwrap_or(0)
    }

    /// Interleaved left/right copy with both channels equal.
    pub fn to_stereo(&self) -> Vec<i16> {
        duplicate_to_stereo(&self.samples)
    }

    /// BLAKE3 hash of the little-endian mono PCM data.
    pub fn pcm_hash(&self) -> String {
        blake3::hash(&pcm16_bytes(&self.samples)).to_hex().to_string()
    }

    /// Encodes the waveform as a WAV file, duplicating to stereo if asked.
    ///
    /// Fails with [`SynthError::Io`](crate::SynthError::Io) if the PCM data
    /// is too large for a WAV header.
    pub fn to_wav(&self, stereo: bool) -> SynthResult<WavResult> {
        let wav = if stereo {
            WavResult::from_stereo(&self.to_stereo(), self.sample_rate)?
        } else {
            WavResult::from_mono(&self.samples, self.sample_rate)?
        };
        Ok(wav)
    }

    /// Streams the waveform as a WAV file to `writer`.
    pub fn write_wav<W: Write>(&self, writer: &mut W, stereo: bool) -> SynthResult<()> {
        if stereo {
            let format = WavFormat::stereo(self.sample_rate);
            write_wav(writer, &format, &pcm16_bytes(&self.to_stereo()))?;
        } else {
            let format = WavFormat::mono(self.sample_rate);
            write_wav(writer, &format, &pcm16_bytes(&self.samples))?;
        }
        Ok(())
    }
}
