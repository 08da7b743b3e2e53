//! Core WAV writing and PCM conversion functions.

use std::io::{self, Write};

use super::format::WavFormat;

/// Size of the canonical RIFF/fmt/data header written by [`write_wav`].
pub const WAV_HEADER_LEN: usize = 44;

/// Largest PCM payload whose data and RIFF chunk sizes fit in 32 bits.
pub const MAX_PCM_BYTES: usize = (u32::MAX - 36) as usize;

/// Data chunk size and RIFF chunk size for `pcm_len` bytes of PCM.
///
/// Fails with [`io::ErrorKind::InvalidInput`] past [`MAX_PCM_BYTES`].
pub(super) fn chunk_sizes(pcm_len: usize) -> io::Result<(u32, u32)> {
    let too_large = || {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{pcm_len} bytes of PCM data exceed the WAV size limit of {MAX_PCM_BYTES}"),
        )
    };
    let data_size = u32::try_from(pcm_len).map_err(|_| too_large())?;
    // File size minus the 8-byte RIFF preamble
    let riff_size = data_size.checked_add(36).ok_or_else(too_large)?;
    Ok((data_size, riff_size))
}

/// Writes a complete WAV file to a writer.
///
/// # Arguments
/// * `writer` - Output writer
/// * `format` - WAV format parameters
/// * `pcm_data` - Raw little-endian PCM bytes
///
/// Nothing is written if `pcm_data` is longer than [`MAX_PCM_BYTES`].
pub fn write_wav<W: Write>(writer: &mut W, format: &WavFormat, pcm_data: &[u8]) -> io::Result<()> {
    let (data_size, riff_size) = chunk_sizes(pcm_data.len())?;

    writer.write_all(b"RIFF")?;
    writer.write_all(&riff_size.to_le_bytes())?;
    writer.write_all(b"WAVE")?;

    writer.write_all(b"fmt ")?;
    writer.write_all(&16u32.to_le_bytes())?; // fmt chunk size for PCM
    writer.write_all(&1u16.to_le_bytes())?; // 1 = integer PCM
    writer.write_all(&format.channels.to_le_bytes())?;
    writer.write_all(&format.sample_rate.to_le_bytes())?;
    writer.write_all(&format.byte_rate().to_le_bytes())?;
    writer.write_all(&format.block_align().to_le_bytes())?;
    writer.write_all(&format.bits_per_sample.to_le_bytes())?;

    writer.write_all(b"data")?;
    writer.write_all(&data_size.to_le_bytes())?;
    writer.write_all(pcm_data)?;

    Ok(())
}

/// Writes a WAV file to a byte vector.
pub fn write_wav_to_vec(format: &WavFormat, pcm_data: &[u8]) -> io::Result<Vec<u8>> {
    chunk_sizes(pcm_data.len())?;
    let mut buffer = Vec::with_capacity(WAV_HEADER_LEN + pcm_data.len());
    write_wav(&mut buffer, format, pcm_data)?;
    Ok(buffer)
}

/// Serializes 16-bit samples as little-endian bytes.
pub fn pcm16_bytes(samples: &[i16]) -> Vec<u8> {
    let mut pcm = Vec::with_capacity(samples.len() * 2);
    for &sample in samples {
        pcm.extend_from_slice(&sample.to_le_bytes());
    }
    pcm
}

/// Interleaves a mono signal into identical left and right channels.
pub fn duplicate_to_stereo(samples: &[i16]) -> Vec<i16> {
    let mut stereo = Vec::with_capacity(samples.len() * 2);
    for &sample in samples {
        stereo.push(sample);
        stereo.push(sample);
    }
    stereo
}
