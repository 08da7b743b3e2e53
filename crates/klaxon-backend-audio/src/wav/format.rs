//! Channel layout and sample rate of a written file.
//!
//! Renders are always mono; a stereo file carries the same samples on both
//! channels, so only the channel count varies between the two layouts.

/// Header parameters of a 16-bit PCM file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavFormat {
    /// 1 for a plain render, 2 when each frame is duplicated left and right.
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Bits per sample (always 16).
    pub bits_per_sample: u16,
}

impl WavFormat {
    /// One channel holding the render as-is.
    pub fn mono(sample_rate: u32) -> Self {
        Self::with_channels(1, sample_rate)
    }

    /// Two channels carrying identical samples.
    pub fn stereo(sample_rate: u32) -> Self {
        Self::with_channels(2, sample_rate)
    }

    fn with_channels(channels: u16, sample_rate: u32) -> Self {
        Self {
            channels,
            sample_rate,
            bits_per_sample: 16,
        }
    }

    /// Bytes in one channel of one frame.
    pub(crate) fn bytes_per_sample(&self) -> u16 {
        self.bits_per_sample / 8
    }

    /// Bytes in one frame, both channels included for stereo.
    pub(crate) fn block_align(&self) -> u16 {
        self.channels * self.bytes_per_sample()
    }

    /// Bytes of PCM data per second of audio.
    pub(crate) fn byte_rate(&self) -> u32 {
        self.sample_rate * self.block_align() as u32
    }
}
