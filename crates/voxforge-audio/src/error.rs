//! Error types for the audio core.

use thiserror::Error;

/// Result type for audio operations.
pub type AudioResult<T> = Result<T, AudioError>;

/// Errors that can occur while decoding or encoding audio.
#[derive(Debug, Error)]
pub enum AudioError {
    /// The base64 payload is malformed.
    #[error("invalid base64 audio payload: {0}")]
    Decode(#[from] base64::DecodeError),

    /// Channel count is zero or too large for a WAV header.
    #[error("invalid channel count: {channels}")]
    InvalidChannelCount {
        /// The invalid channel count.
        channels: u16,
    },

    /// Sample rate is zero or its byte rate overflows the header field.
    #[error("invalid sample rate: {rate}")]
    InvalidSampleRate {
        /// The invalid sample rate.
        rate: u32,
    },

    /// Channel sample sequences have different lengths.
    #[error("channel {channel} has {found} samples, expected {expected}")]
    ChannelLengthMismatch {
        /// Index of the offending channel.
        channel: usize,
        /// Length of channel 0.
        expected: usize,
        /// Length of the offending channel.
        found: usize,
    },

    /// The input is not a WAV stream this crate can read.
    #[error("invalid WAV data: {message}")]
    InvalidWav {
        /// Error message.
        message: String,
    },

    /// The speech service returned no audio.
    #[error("no audio payload to decode")]
    MissingPayload,

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AudioError {
    /// Creates an invalid WAV error.
    pub fn invalid_wav(message: impl Into<String>) -> Self {
        Self::InvalidWav {
            message: message.into(),
        }
    }

    /// Stable machine-readable error code.
    pub fn code(&self) -> &'static str {
        match self {
            AudioError::Decode(_) => "AUDIO_001",
            AudioError::InvalidChannelCount { .. } => "AUDIO_002",
            AudioError::InvalidSampleRate { .. } => "AUDIO_003",
            AudioError::ChannelLengthMismatch { .. } => "AUDIO_004",
            AudioError::InvalidWav { .. } => "AUDIO_005",
            AudioError::Io(_) => "AUDIO_006",
            AudioError::MissingPayload => "AUDIO_007",
        }
    }

    /// Pipeline stage the error belongs to, for grouping in reports.
    ///
    /// One of `"payload"`, `"layout"`, `"container"` or `"io"`.
    pub fn category(&self) -> &'static str {
        match self {
            AudioError::Decode(_) | AudioError::MissingPayload => "payload",
            AudioError::InvalidChannelCount { .. }
            | AudioError::InvalidSampleRate { .. }
            | AudioError::ChannelLengthMismatch { .. } => "layout",
            AudioError::InvalidWav { .. } => "container",
            AudioError::Io(_) => "io",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::Engine as _;

    #[test]
    fn test_invalid_wav_helper() {
        let err = AudioError::invalid_wav("missing data chunk");
        assert!(err.to_string().contains("missing data chunk"));
        assert_eq!(err.code(), "AUDIO_005");
    }

    #[test]
    fn test_decode_error_conversion() {
        let decode_err = base64::engine::general_purpose::STANDARD
            .decode("not base64!")
            .unwrap_err();
        let err: AudioError = decode_err.into();
        assert_eq!(err.code(), "AUDIO_001");
        assert_eq!(err.category(), "payload");
        assert!(err.to_string().starts_with("invalid base64"));
    }

    #[test]
    fn test_categories() {
        assert_eq!(AudioError::MissingPayload.category(), "payload");
        assert_eq!(
            AudioError::InvalidChannelCount { channels: 0 }.category(),
            "layout"
        );
        assert_eq!(AudioError::InvalidSampleRate { rate: 0 }.category(), "layout");
        assert_eq!(AudioError::invalid_wav("x").category(), "container");
        assert_eq!(
            AudioError::Io(std::io::Error::other("x")).category(),
            "io"
        );
    }

    #[test]
    fn test_codes_are_unique() {
        let errors = [
            AudioError::InvalidChannelCount { channels: 0 },
            AudioError::InvalidSampleRate { rate: 0 },
            AudioError::ChannelLengthMismatch {
                channel: 1,
                expected: 2,
                found: 3,
            },
            AudioError::invalid_wav("x"),
            AudioError::Io(std::io::Error::other("x")),
            AudioError::MissingPayload,
        ];
        let mut codes: Vec<_> = errors.iter().map(AudioError::code).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), errors.len());
    }
}
