//! Tests for the WAV writer module.

use pretty_assertions::assert_eq;

use super::builder::WavWriter;
use super::format::WavFormat;
use super::pcm::{compute_pcm_hash, extract_pcm_data};
use super::result::WavResult;
use super::writer::{
    chunk_sizes, duplicate_to_stereo, pcm16_bytes, write_wav, write_wav_to_vec, MAX_PCM_BYTES,
    WAV_HEADER_LEN,
};

fn read_u16(bytes: &[u8], at: usize) -> u16 {
    u16::from_le_bytes([bytes[at], bytes[at + 1]])
}

fn read_u32(bytes: &[u8], at: usize) -> u32 {
    u32::from_le_bytes([bytes[at], bytes[at + 1], bytes[at + 2], bytes[at + 3]])
}

// =========================================================================
// Format
// =========================================================================

#[test]
fn test_wav_format_mono() {
    let format = WavFormat::mono(44100);
    assert_eq!(format.channels, 1);
    assert_eq!(format.sample_rate, 44100);
    assert_eq!(format.bits_per_sample, 16);
    assert_eq!(format.block_align(), 2);
    assert_eq!(format.byte_rate(), 88200);
}

#[test]
fn test_wav_format_stereo() {
    let format = WavFormat::stereo(48000);
    assert_eq!(format.channels, 2);
    assert_eq!(format.bytes_per_sample(), 2);
    assert_eq!(format.block_align(), 4);
    assert_eq!(format.byte_rate(), 192000);
}

// =========================================================================
// Header layout
// =========================================================================

#[test]
fn test_header_fields() {
    let pcm = pcm16_bytes(&[0, 1, -1, i16::MAX]);
    let wav = write_wav_to_vec(&WavFormat::stereo(44100), &pcm).unwrap();

    assert_eq!(wav.len(), WAV_HEADER_LEN + 8);
    assert_eq!(&wav[0..4], b"RIFF");
    assert_eq!(read_u32(&wav, 4), 36 + 8);
    assert_eq!(&wav[8..12], b"WAVE");
    assert_eq!(&wav[12..16], b"fmt ");
    assert_eq!(read_u32(&wav, 16), 16);
    assert_eq!(read_u16(&wav, 20), 1);
    assert_eq!(read_u16(&wav, 22), 2);
    assert_eq!(read_u32(&wav, 24), 44100);
    assert_eq!(read_u32(&wav, 28), 176400);
    assert_eq!(read_u16(&wav, 32), 4);
    assert_eq!(read_u16(&wav, 34), 16);
    assert_eq!(&wav[36..40], b"data");
    assert_eq!(read_u32(&wav, 40), 8);
    assert_eq!(&wav[44..], &pcm[..]);
}

#[test]
fn test_write_wav_matches_vec_writer() {
    let pcm = pcm16_bytes(&[5, -5, 300]);
    let format = WavFormat::mono(8000);
    let mut buffer = Vec::new();
    write_wav(&mut buffer, &format, &pcm).unwrap();
    assert_eq!(buffer, write_wav_to_vec(&format, &pcm).unwrap());
}

#[test]
fn test_empty_pcm_is_header_only() {
    let wav = write_wav_to_vec(&WavFormat::mono(44100), &[]).unwrap();
    assert_eq!(wav.len(), WAV_HEADER_LEN);
    assert_eq!(read_u32(&wav, 40), 0);
    assert_eq!(extract_pcm_data(&wav), Some(&[][..]));
}

// =========================================================================
// PCM conversion
// =========================================================================

#[test]
fn test_pcm16_bytes_little_endian() {
    assert_eq!(
        pcm16_bytes(&[1, -2, 0x1234]),
        vec![0x01, 0x00, 0xFE, 0xFF, 0x34, 0x12]
    );
}

#[test]
fn test_duplicate_to_stereo() {
    assert_eq!(duplicate_to_stereo(&[7, -7]), vec![7, 7, -7, -7]);
    assert!(duplicate_to_stereo(&[]).is_empty());
}

// =========================================================================
// Extraction and hashing
// =========================================================================

#[test]
fn test_extract_pcm_round_trip() {
    let pcm = pcm16_bytes(&[10, 20, 30]);
    let wav = write_wav_to_vec(&WavFormat::mono(22050), &pcm).unwrap();
    assert_eq!(extract_pcm_data(&wav), Some(&pcm[..]));
}

#[test]
fn test_extract_rejects_invalid_buffers() {
    assert_eq!(extract_pcm_data(b"RIFF"), None);
    let mut wav = write_wav_to_vec(&WavFormat::mono(22050), &pcm16_bytes(&[1, 2])).unwrap();
    wav[8..12].copy_from_slice(b"AVI ");
    assert_eq!(extract_pcm_data(&wav), None);
}

#[test]
fn test_extract_rejects_truncated_data_chunk() {
    let wav = write_wav_to_vec(&WavFormat::mono(22050), &pcm16_bytes(&[1, 2, 3, 4])).unwrap();
    assert_eq!(extract_pcm_data(&wav[..wav.len() - 2]), None);
}

#[test]
fn test_extract_skips_unknown_chunks() {
    let pcm = pcm16_bytes(&[42, -42]);
    let plain = write_wav_to_vec(&WavFormat::mono(8000), &pcm).unwrap();

    let mut wav = plain[..36].to_vec();
    wav.extend_from_slice(b"LIST");
    wav.extend_from_slice(&3u32.to_le_bytes());
    wav.extend_from_slice(&[1, 2, 3, 0]); // odd chunk plus pad byte
    wav.extend_from_slice(&plain[36..]);

    assert_eq!(extract_pcm_data(&wav), Some(&pcm[..]));
}

#[test]
fn test_compute_pcm_hash_ignores_header() {
    let pcm = pcm16_bytes(&[1, 2, 3]);
    let at_44k = write_wav_to_vec(&WavFormat::mono(44100), &pcm).unwrap();
    let at_8k = write_wav_to_vec(&WavFormat::mono(8000), &pcm).unwrap();
    assert_ne!(at_44k, at_8k);
    assert_eq!(compute_pcm_hash(&at_44k), compute_pcm_hash(&at_8k));
    assert_eq!(
        compute_pcm_hash(&at_44k),
        Some(blake3::hash(&pcm).to_hex().to_string())
    );
    assert_eq!(compute_pcm_hash(b"not a wav"), None);
}

// =========================================================================
// WavResult and WavWriter
// =========================================================================

#[test]
fn test_wav_result_mono() {
    let samples = [100i16, -100, 200, -200];
    let result = WavResult::from_mono(&samples, 4).unwrap();
    assert!(!result.is_stereo);
    assert_eq!(result.num_samples, 4);
    assert!((result.duration_seconds() - 1.0).abs() < 1e-12);
    assert_eq!(compute_pcm_hash(&result.wav_data), Some(result.pcm_hash.clone()));
}

#[test]
fn test_wav_result_stereo_counts_frames() {
    let interleaved = duplicate_to_stereo(&[1, 2, 3]);
    let result = WavResult::from_stereo(&interleaved, 44100).unwrap();
    assert!(result.is_stereo);
    assert_eq!(result.num_samples, 3);
    assert_eq!(result.wav_data.len(), WAV_HEADER_LEN + 12);
}

#[test]
fn test_writer_matches_result() {
    let samples = [3i16, 1, 4, 1, 5];
    let writer = WavWriter::stereo(48000);
    let result = WavResult::from_stereo(&duplicate_to_stereo(&samples), 48000).unwrap();
    assert_eq!(writer.write(&samples).unwrap(), result.wav_data);
    assert_eq!(writer.pcm_hash(&samples), result.pcm_hash);

    let mono = WavWriter::mono(48000);
    assert_eq!(mono.format(), WavFormat::mono(48000));
    assert_eq!(
        mono.write(&samples).unwrap(),
        WavResult::from_mono(&samples, 48000).unwrap().wav_data
    );
}

#[test]
fn test_output_is_deterministic() {
    let samples: Vec<i16> = (0..1000).map(|i| (i * 37 % 2000 - 1000) as i16).collect();
    let writer = WavWriter::mono(44100);
    assert_eq!(writer.write(&samples).unwrap(), writer.write(&samples).unwrap());
}

// =========================================================================
// Size limits
// =========================================================================

#[test]
fn test_chunk_sizes_at_limit() {
    assert_eq!(chunk_sizes(0).unwrap(), (0, 36));
    assert_eq!(chunk_sizes(1_000).unwrap(), (1_000, 1_036));
    assert_eq!(
        chunk_sizes(MAX_PCM_BYTES).unwrap(),
        (u32::MAX - 36, u32::MAX)
    );
}

#[test]
fn test_chunk_sizes_reject_oversized_data() {
    // A 25,000 s stereo render at 44.1 kHz.
    let oversized = 25_000usize * 44_100 * 4;
    for len in [MAX_PCM_BYTES + 1, u32::MAX as usize, oversized] {
        let err = chunk_sizes(len).unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::InvalidInput, "len {len}");
    }
}
