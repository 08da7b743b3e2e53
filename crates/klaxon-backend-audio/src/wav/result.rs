//! WAV file generation result type.

use std::io;

use super::format::WavFormat;
use super::writer::{pcm16_bytes, write_wav_to_vec};

/// Encoded WAV file plus the metadata reported alongside it.
#[derive(Debug, Clone)]
pub struct WavResult {
    /// Complete WAV file bytes.
    pub wav_data: Vec<u8>,
    /// BLAKE3 hash of the PCM data only.
    pub pcm_hash: String,
    /// Whether the output is stereo.
    pub is_stereo: bool,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Number of frames per channel.
    pub num_samples: usize,
}

impl WavResult {
    /// Creates a WavResult from mono samples.
    pub fn from_mono(samples: &[i16], sample_rate: u32) -> io::Result<Self> {
        Self::encode(WavFormat::mono(sample_rate), samples, samples.len())
    }

    /// Creates a WavResult from interleaved left/right samples.
    pub fn from_stereo(interleaved: &[i16], sample_rate: u32) -> io::Result<Self> {
        Self::encode(
            WavFormat::stereo(sample_rate),
            interleaved,
            interleaved.len() / 2,
        )
    }

    fn encode(format: WavFormat, samples: &[i16], num_samples: usize) -> io::Result<Self> {
        let pcm = pcm16_bytes(samples);
        let wav_data = write_wav_to_vec(&format, &pcm)?;
        let pcm_hash = blake3::hash(&pcm).to_hex().to_string();

        Ok(Self {
            wav_data,
            pcm_hash,
            is_stereo: format.channels == 2,
            sample_rate: format.sample_rate,
            num_samples,
        })
    }

    /// Returns the duration in seconds.
    pub fn duration_seconds(&self) -> f64 {
        self.num_samples as f64 / self.sample_rate as f64
    }
}
