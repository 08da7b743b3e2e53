//! Deterministic WAV file writer.
//!
//! Writes 16-bit PCM RIFF files with a fixed 44-byte header and no timestamps
//! or variable metadata, so identical samples always produce identical bytes.
//! The hash of the PCM data identifies a render independent of its container.

mod builder;
mod format;
mod pcm;
mod result;
mod writer;

#[cfg(test)]
mod tests;

pub use builder::WavWriter;
pub use format::WavFormat;
pub use pcm::{compute_pcm_hash, extract_pcm_data};
pub use result::WavResult;
pub use writer::{
    duplicate_to_stereo, pcm16_bytes, write_wav, write_wav_to_vec, MAX_PCM_BYTES, WAV_HEADER_LEN,
};
