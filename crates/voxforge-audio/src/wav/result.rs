//! WAV generation result type.

use super::format::WavFormat;
use super::header::HEADER_SIZE;
use super::read::pcm_hash;
use super::writer::{buffer_to_pcm16, write_wav_to_vec};
use crate::buffer::AudioBuffer;
use crate::error::AudioResult;

/// Result of WAV file generation.
#[derive(Debug, Clone)]
pub struct WavResult {
    /// Complete WAV file bytes.
    pub wav_data: Vec<u8>,
    /// BLAKE3 hash of PCM data only.
    pub pcm_hash: String,
    /// Number of channels.
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Number of frames.
    pub num_frames: usize,
}

impl WavResult {
    /// Encodes a float buffer.
    pub fn from_buffer(buffer: &AudioBuffer) -> Self {
        let pcm = buffer_to_pcm16(buffer);
        let format = WavFormat::pcm16(buffer.number_of_channels(), buffer.sample_rate());
        Self::from_pcm(format, &pcm)
    }

    /// Wraps already-encoded PCM16 bytes without a float round trip.
    ///
    /// The payload is copied verbatim; bytes past the last whole frame are
    /// dropped.
    ///
    /// # Errors
    /// Fails when `format` cannot be written to a WAV header.
    pub fn from_pcm16_bytes(pcm: &[u8], format: WavFormat) -> AudioResult<Self> {
        format.validate()?;
        Ok(Self::from_pcm(format, pcm))
    }

    fn from_pcm(format: WavFormat, pcm: &[u8]) -> Self {
        let wav_data = write_wav_to_vec(&format, pcm);
        let pcm_hash = pcm_hash(&wav_data[HEADER_SIZE..]);
        let num_frames = match format.block_align() {
            0 => 0,
            align => (wav_data.len() - HEADER_SIZE) / usize::from(align),
        };

        Self {
            wav_data,
            pcm_hash,
            channels: format.channels,
            sample_rate: format.sample_rate,
            num_frames,
        }
    }

    /// Whether the output is stereo.
    pub fn is_stereo(&self) -> bool {
        self.channels == 2
    }

    /// Returns the duration in seconds.
    pub fn duration_seconds(&self) -> f64 {
        self.num_frames as f64 / f64::from(self.sample_rate)
    }
}
