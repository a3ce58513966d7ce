//! WAV file format parameters.

use serde::{Deserialize, Serialize};

use crate::error::{AudioError, AudioResult};
use crate::pcm::PcmLayout;

/// Largest channel count whose 16-bit block align fits the 2-byte header field.
pub const MAX_CHANNELS: u16 = u16::MAX / 2;

/// WAV file format parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WavFormat {
    /// Number of channels (1 = mono, 2 = stereo).
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Bits per sample (always 16 for this implementation).
    pub bits_per_sample: u16,
}

impl WavFormat {
    /// Creates a 16-bit PCM format with any channel count.
    pub fn pcm16(channels: u16, sample_rate: u32) -> Self {
        Self {
            channels,
            sample_rate,
            bits_per_sample: 16,
        }
    }

    /// Creates a mono WAV format.
    pub fn mono(sample_rate: u32) -> Self {
        Self::pcm16(1, sample_rate)
    }

    /// Creates a stereo WAV format.
    pub fn stereo(sample_rate: u32) -> Self {
        Self::pcm16(2, sample_rate)
    }

    /// Calculates bytes per sample (per channel).
    pub fn bytes_per_sample(&self) -> u16 {
        self.bits_per_sample / 8
    }

    /// Calculates block align (bytes per sample frame).
    ///
    /// Saturates for formats that [`validate`](Self::validate) rejects.
    pub fn block_align(&self) -> u16 {
        self.channels.saturating_mul(self.bytes_per_sample())
    }

    /// Calculates byte rate (bytes per second).
    ///
    /// Saturates for formats that [`validate`](Self::validate) rejects.
    pub fn byte_rate(&self) -> u32 {
        self.sample_rate.saturating_mul(u32::from(self.block_align()))
    }

    /// Size of the data chunk payload for `frames` frames.
    pub fn data_size(&self, frames: usize) -> usize {
        frames.saturating_mul(usize::from(self.block_align()))
    }

    /// Checks that every derived header field fits its fixed-width slot.
    ///
    /// # Errors
    /// `InvalidChannelCount` for zero or more than [`MAX_CHANNELS`] channels,
    /// `InvalidSampleRate` for a zero rate or a byte rate beyond `u32::MAX`,
    /// `InvalidWav` for any bit depth other than 16.
    pub fn validate(&self) -> AudioResult<()> {
        if self.bits_per_sample != 16 {
            return Err(AudioError::invalid_wav(format!(
                "unsupported bit depth {}, only 16-bit is supported",
                self.bits_per_sample
            )));
        }
        if self.channels == 0 || self.channels > MAX_CHANNELS {
            return Err(AudioError::InvalidChannelCount {
                channels: self.channels,
            });
        }
        let frame_bytes = u32::from(self.channels) * u32::from(self.bytes_per_sample());
        if self.sample_rate == 0 || self.sample_rate.checked_mul(frame_bytes).is_none() {
            return Err(AudioError::InvalidSampleRate {
                rate: self.sample_rate,
            });
        }
        Ok(())
    }
}

impl From<PcmLayout> for WavFormat {
    fn from(layout: PcmLayout) -> Self {
        Self::pcm16(layout.channels, layout.sample_rate)
    }
}
