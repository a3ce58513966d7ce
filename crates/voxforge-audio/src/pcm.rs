//! Interpretation of raw 16-bit little-endian PCM bytes.

use serde::{Deserialize, Serialize};

use crate::buffer::AudioBuffer;
use crate::error::AudioResult;
use crate::wav::WavFormat;

/// Sample rate used by the speech model's PCM output.
pub const DEFAULT_SAMPLE_RATE: u32 = 24000;

/// Channel count used by the speech model's PCM output.
pub const DEFAULT_CHANNELS: u16 = 1;

/// Bytes per 16-bit sample.
pub const BYTES_PER_SAMPLE: usize = 2;

/// Declared layout of an incoming PCM16 payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PcmLayout {
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Number of interleaved channels.
    pub channels: u16,
}

impl Default for PcmLayout {
    fn default() -> Self {
        Self {
            sample_rate: DEFAULT_SAMPLE_RATE,
            channels: DEFAULT_CHANNELS,
        }
    }
}

impl PcmLayout {
    /// Creates a layout.
    pub fn new(sample_rate: u32, channels: u16) -> Self {
        Self {
            sample_rate,
            channels,
        }
    }

    /// Bytes per frame (one sample per channel).
    pub fn frame_size(&self) -> usize {
        usize::from(self.channels) * BYTES_PER_SAMPLE
    }

    /// Checks that the layout describes a writable 16-bit WAV stream.
    ///
    /// # Errors
    /// `InvalidChannelCount` for zero or more than
    /// [`MAX_CHANNELS`](crate::wav::MAX_CHANNELS) channels, `InvalidSampleRate`
    /// for a zero rate or one whose byte rate overflows `u32`.
    pub fn validate(&self) -> AudioResult<()> {
        WavFormat::from(*self).validate()
    }

    /// Number of whole frames contained in `byte_len` bytes.
    pub fn frame_count(&self, byte_len: usize) -> usize {
        match self.frame_size() {
            0 => 0,
            size => byte_len / size,
        }
    }
}

/// Converts a signed 16-bit sample to a float in [-1.0, 1.0).
#[inline]
pub fn i16_to_sample(value: i16) -> f32 {
    f32::from(value) / 32768.0
}

/// Interprets interleaved little-endian PCM16 bytes as an [`AudioBuffer`].
///
/// Sample `i` of channel `c` is `sample16[i * channels + c] / 32768`. Bytes
/// past the last whole frame are ignored.
///
/// # Errors
/// Fails when the layout cannot be written to a WAV header (see
/// [`PcmLayout::validate`]).
pub fn interpret_pcm16(bytes: &[u8], sample_rate: u32, channels: u16) -> AudioResult<AudioBuffer> {
    let layout = PcmLayout::new(sample_rate, channels);
    layout.validate()?;

    let frame_count = layout.frame_count(bytes.len());
    let num_channels = usize::from(channels);

    let mut data: Vec<Vec<f32>> = (0..num_channels)
        .map(|_| Vec::with_capacity(frame_count))
        .collect();

    for frame in bytes.chunks_exact(layout.frame_size()) {
        for (channel, pair) in frame.chunks_exact(BYTES_PER_SAMPLE).enumerate() {
            let value = i16::from_le_bytes([pair[0], pair[1]]);
            data[channel].push(i16_to_sample(value));
        }
    }

    AudioBuffer::from_channels(data, sample_rate)
}

/// Interprets PCM16 bytes using a [`PcmLayout`].
pub fn interpret_with_layout(bytes: &[u8], layout: PcmLayout) -> AudioResult<AudioBuffer> {
    interpret_pcm16(bytes, layout.sample_rate, layout.channels)
}
