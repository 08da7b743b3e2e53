//! WAV file writer builder.

use std::io;

use super::format::WavFormat;
use super::writer::{duplicate_to_stereo, pcm16_bytes, write_wav_to_vec};

/// Writes mono renders as mono or duplicated-stereo WAV files.
#[derive(Debug, Clone, Copy)]
pub struct WavWriter {
    format: WavFormat,
}

impl WavWriter {
    /// Creates a writer producing mono files.
    pub fn mono(sample_rate: u32) -> Self {
        Self {
            format: WavFormat::mono(sample_rate),
        }
    }

    /// Creates a writer producing two-channel files.
    pub fn stereo(sample_rate: u32) -> Self {
        Self {
            format: WavFormat::stereo(sample_rate),
        }
    }

    /// Format written by this writer.
    pub fn format(&self) -> WavFormat {
        self.format
    }

    /// Encodes a mono signal, duplicating it to both channels for stereo
    /// writers.
    pub fn write(&self, samples: &[i16]) -> io::Result<Vec<u8>> {
        write_wav_to_vec(&self.format, &self.pcm(samples))
    }

    /// BLAKE3 hash of the PCM data [`write`](Self::write) would produce.
    pub fn pcm_hash(&self, samples: &[i16]) -> String {
        blake3::hash(&self.pcm(samples)).to_hex().to_string()
    }

    fn pcm(&self, samples: &[i16]) -> Vec<u8> {
        if self.format.channels == 2 {
            pcm16_bytes(&duplicate_to_stereo(samples))
        } else {
            pcm16_bytes(samples)
        }
    }
}
