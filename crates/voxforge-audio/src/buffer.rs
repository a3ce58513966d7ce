//! Multi-channel floating-point audio buffer.

use crate::error::{AudioError, AudioResult};
use crate::wav::{WavFormat, MAX_CHANNELS};

/// Planar audio buffer: one `f32` sequence per channel.
///
/// Every channel holds exactly [`len`](Self::len) samples. The buffer cannot be
/// mutated after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct AudioBuffer {
    sample_rate: u32,
    channels: Vec<Vec<f32>>,
}

impl AudioBuffer {
    /// Creates a buffer from per-channel sample data.
    ///
    /// # Errors
    /// Fails if the channel count is zero or above [`MAX_CHANNELS`], the sample
    /// rate is zero or gives a byte rate beyond `u32::MAX`, or the channels
    /// have unequal lengths.
    pub fn from_channels(channels: Vec<Vec<f32>>, sample_rate: u32) -> AudioResult<Self> {
        let count = u16::try_from(channels.len()).unwrap_or(u16::MAX);
        if count > MAX_CHANNELS {
            return Err(AudioError::InvalidChannelCount { channels: count });
        }
        WavFormat::pcm16(count, sample_rate).validate()?;

        let expected = channels[0].len();
        if let Some((channel, data)) = channels
            .iter()
            .enumerate()
            .find(|(_, data)| data.len() != expected)
        {
            return Err(AudioError::ChannelLengthMismatch {
                channel,
                expected,
                found: data.len(),
            });
        }

        Ok(Self {
            sample_rate,
            channels,
        })
    }

    /// Creates a mono buffer.
    pub fn mono(samples: Vec<f32>, sample_rate: u32) -> AudioResult<Self> {
        Self::from_channels(vec![samples], sample_rate)
    }

    /// Creates a stereo buffer.
    pub fn stereo(left: Vec<f32>, right: Vec<f32>, sample_rate: u32) -> AudioResult<Self> {
        Self::from_channels(vec![left, right], sample_rate)
    }

    /// Sample rate in Hz.
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Number of channels (always at least 1).
    pub fn number_of_channels(&self) -> u16 {
        // Bounded by the constructor.
        self.channels.len() as u16
    }

    /// Number of frames.
    pub fn len(&self) -> usize {
        self.channels[0].len()
    }

    /// Whether the buffer holds zero frames.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Samples of one channel, or `None` if the index is out of range.
    pub fn channel_data(&self, channel: usize) -> Option<&[f32]> {
        self.channels.get(channel).map(Vec::as_slice)
    }

    /// Sample at `(frame, channel)`, or `None` if either index is out of range.
    pub fn sample(&self, frame: usize, channel: usize) -> Option<f32> {
        self.channels.get(channel)?.get(frame).copied()
    }

    /// Iterates samples frame by frame, channel by channel within each frame.
    pub fn interleaved(&self) -> impl Iterator<Item = f32> + '_ {
        (0..self.len()).flat_map(move |frame| self.channels.iter().map(move |ch| ch[frame]))
    }

    /// Duration in seconds.
    pub fn duration_seconds(&self) -> f64 {
        self.len() as f64 / f64::from(self.sample_rate)
    }
}
