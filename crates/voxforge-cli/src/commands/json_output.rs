//! JSON output types for machine-readable CLI output.
//!
//! These records back the `--json` flag on `encode` and `inspect`, so scripts
//! can parse results without scraping colored text.

use serde::{Deserialize, Serialize};
use voxforge_audio::wav::WavView;
use voxforge_audio::{AudioError, VoiceoverAsset};

/// Error codes for CLI operations.
///
/// These codes are stable and can be used for programmatic error handling.
/// Format: CLI_XXX for CLI-level errors; audio errors pass through their
/// AUDIO_XXX code.
pub mod error_codes {
    /// File could not be read
    pub const FILE_READ: &str = "CLI_001";
    /// File could not be written
    pub const FILE_WRITE: &str = "CLI_002";
    /// Config file could not be loaded
    pub const CONFIG: &str = "CLI_003";
}

/// A structured error in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonError {
    /// Stable error code (e.g., "CLI_001", "AUDIO_001")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Pipeline stage of an audio error ("payload", "layout", ...)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Source file path (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

impl JsonError {
    /// Creates a new error with code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            category: None,
            file: None,
        }
    }

    /// Sets the file path for this error.
    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }
}

impl From<&AudioError> for JsonError {
    fn from(err: &AudioError) -> Self {
        let mut error = Self::new(err.code(), err.to_string());
        error.category = Some(err.category().to_string());
        error
    }
}

/// Audio stream summary shared by `encode` and `inspect`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AudioSummary {
    /// Number of channels
    pub channels: u16,
    /// Sample rate in Hz
    pub sample_rate: u32,
    /// Number of frames
    pub frames: usize,
    /// Duration in seconds
    pub duration_seconds: f64,
    /// Total WAV size in bytes
    pub wav_bytes: usize,
    /// BLAKE3 hash of the PCM payload
    pub pcm_hash: String,
}

/// Result of the `encode` command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EncodeOutput {
    /// Whether encoding succeeded
    pub success: bool,
    /// Errors encountered
    pub errors: Vec<JsonError>,
    /// Written file path (on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_path: Option<String>,
    /// MIME type of the written file (on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
    /// Audio summary (on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio: Option<AudioSummary>,
}

impl EncodeOutput {
    /// Successful encode.
    pub fn success(output_path: impl Into<String>, asset: &VoiceoverAsset) -> Self {
        let wav = &asset.wav;
        Self {
            success: true,
            errors: vec![],
            output_path: Some(output_path.into()),
            mime_type: Some(asset.mime_type.to_string()),
            audio: Some(AudioSummary {
                channels: wav.channels,
                sample_rate: wav.sample_rate,
                frames: wav.num_frames,
                duration_seconds: wav.duration_seconds(),
                wav_bytes: wav.wav_data.len(),
                pcm_hash: wav.pcm_hash.clone(),
            }),
        }
    }

    /// Failed encode.
    pub fn failure(errors: Vec<JsonError>) -> Self {
        Self {
            success: false,
            errors,
            output_path: None,
            mime_type: None,
            audio: None,
        }
    }
}

/// Result of the `inspect` command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InspectOutput {
    /// Whether inspection succeeded
    pub success: bool,
    /// Errors encountered
    pub errors: Vec<JsonError>,
    /// Inspected file path
    pub input: String,
    /// Audio summary (on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio: Option<AudioSummary>,
}

impl InspectOutput {
    /// Successful inspection.
    pub fn success(input: impl Into<String>, view: &WavView<'_>, wav_bytes: usize) -> Self {
        Self {
            success: true,
            errors: vec![],
            input: input.into(),
            audio: Some(AudioSummary {
                channels: view.format.channels,
                sample_rate: view.format.sample_rate,
                frames: view.frame_count(),
                duration_seconds: view.duration_seconds(),
                wav_bytes,
                pcm_hash: voxforge_audio::wav::pcm_hash(view.data),
            }),
        }
    }

    /// Failed inspection.
    pub fn failure(input: impl Into<String>, errors: Vec<JsonError>) -> Self {
        Self {
            success: false,
            errors,
            input: input.into(),
            audio: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_error_from_audio_error() {
        let err = AudioError::InvalidChannelCount { channels: 0 };
        let json = JsonError::from(&err).with_file("voice.b64");
        assert_eq!(json.code, "AUDIO_002");
        assert_eq!(json.category.as_deref(), Some("layout"));
        assert_eq!(json.file.as_deref(), Some("voice.b64"));
    }

    #[test]
    fn test_failure_omits_optional_fields() {
        let output = EncodeOutput::failure(vec![JsonError::new(error_codes::FILE_READ, "nope")]);
        let json = serde_json::to_string(&output).unwrap();
        assert!(json.contains(r#""success":false"#));
        assert!(!json.contains("output_path"));
        assert!(!json.contains("audio"));
        assert!(!json.contains(r#""file""#));
        assert!(!json.contains("category"));
    }
}
