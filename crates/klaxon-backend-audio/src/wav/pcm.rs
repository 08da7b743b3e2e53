//! PCM data extraction and hashing utilities.

use super::writer::WAV_HEADER_LEN;

/// Extracts the `data` chunk from a WAV file buffer.
///
/// Walks the chunk list so files with extra chunks before `data` are
/// accepted. Returns `None` for anything that is not a RIFF/WAVE buffer or
/// whose `data` chunk runs past the end.
pub fn extract_pcm_data(wav_data: &[u8]) -> Option<&[u8]> {
    if wav_data.len() < WAV_HEADER_LEN {
        return None;
    }

    if &wav_data[0..4] != b"RIFF" || &wav_data[8..12] != b"WAVE" {
        return None;
    }

    let mut pos = 12;
    while pos + 8 <= wav_data.len() {
        let chunk_id = &wav_data[pos..pos + 4];
        let chunk_size = u32::from_le_bytes([
            wav_data[pos + 4],
            wav_data[pos + 5],
            wav_data[pos + 6],
            wav_data[pos + 7],
        ]) as usize;

        if chunk_id == b"data" {
            let data_start = pos + 8;
            let data_end = data_start.checked_add(chunk_size)?;
            return wav_data.get(data_start..data_end);
        }

        pos = pos.checked_add(8 + chunk_size)?;
        // Chunks are word aligned
        if !chunk_size.is_multiple_of(2) {
            pos += 1;
        }
    }

    None
}

/// BLAKE3 hash of the PCM data of a WAV file, or `None` if it is malformed.
pub fn compute_pcm_hash(wav_data: &[u8]) -> Option<String> {
    extract_pcm_data(wav_data).map(|pcm| blake3::hash(pcm).to_hex().to_string())
}
