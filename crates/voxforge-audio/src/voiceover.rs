//! Voiceover packaging: base64 speech payload to a downloadable WAV asset.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::decode::decode_base64;
use crate::error::{AudioError, AudioResult};
use crate::pcm::{interpret_with_layout, PcmLayout};
use crate::wav::WavResult;

/// MIME type of the generated asset.
pub const WAV_MIME_TYPE: &str = "audio/wav";

/// Prebuilt speech voices offered for voiceovers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Voice {
    /// Balanced.
    #[default]
    Kore,
    /// Youthful.
    Puck,
    /// Deep.
    Charon,
    /// Bright.
    Zephyr,
    /// Commanding.
    Fenrir,
}

impl Voice {
    /// All voices in display order.
    pub const ALL: [Voice; 5] = [
        Voice::Kore,
        Voice::Puck,
        Voice::Charon,
        Voice::Zephyr,
        Voice::Fenrir,
    ];

    /// Voice identifier as understood by the speech service.
    pub fn id(&self) -> &'static str {
        match self {
            Voice::Kore => "Kore",
            Voice::Puck => "Puck",
            Voice::Charon => "Charon",
            Voice::Zephyr => "Zephyr",
            Voice::Fenrir => "Fenrir",
        }
    }

    /// Short description of the voice character.
    pub fn description(&self) -> &'static str {
        match self {
            Voice::Kore => "Balanced",
            Voice::Puck => "Youthful",
            Voice::Charon => "Deep",
            Voice::Zephyr => "Bright",
            Voice::Fenrir => "Commanding",
        }
    }

    /// Download file name for a voiceover in this voice.
    pub fn file_name(&self) -> String {
        format!("voiceover_{}.wav", self.id().to_lowercase())
    }
}

impl fmt::Display for Voice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Error returned when parsing an unknown voice name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown voice '{0}' (expected one of: kore, puck, charon, zephyr, fenrir)")]
pub struct UnknownVoice(pub String);

impl FromStr for Voice {
    type Err = UnknownVoice;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Voice::ALL
            .into_iter()
            .find(|voice| voice.id().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownVoice(s.to_string()))
    }
}

/// A playable, downloadable WAV asset.
#[derive(Debug, Clone)]
pub struct VoiceoverAsset {
    /// Suggested file name.
    pub file_name: String,
    /// MIME type, always [`WAV_MIME_TYPE`].
    pub mime_type: &'static str,
    /// Encoded WAV stream plus metadata.
    pub wav: WavResult,
}

impl VoiceoverAsset {
    /// WAV bytes.
    pub fn bytes(&self) -> &[u8] {
        &self.wav.wav_data
    }
}

/// Runs the full pipeline: base64 → PCM16 → float buffer → WAV.
///
/// # Errors
/// Fails on malformed base64 or an invalid layout.
pub fn render_voiceover(base64_pcm: &str, layout: PcmLayout) -> AudioResult<WavResult> {
    let bytes = decode_base64(base64_pcm)?;
    let buffer = interpret_with_layout(&bytes, layout)?;
    Ok(WavResult::from_buffer(&buffer))
}

/// Runs the pipeline and names the result for `voice`.
pub fn package_voiceover(
    base64_pcm: &str,
    layout: PcmLayout,
    voice: Voice,
) -> AudioResult<VoiceoverAsset> {
    let wav = render_voiceover(base64_pcm, layout)?;
    Ok(VoiceoverAsset {
        file_name: voice.file_name(),
        mime_type: WAV_MIME_TYPE,
        wav,
    })
}

/// Rejects an empty payload, which the speech service returns on failure.
pub fn require_payload(base64_pcm: Option<&str>) -> AudioResult<&str> {
    match base64_pcm.map(str::trim) {
        Some(payload) if !payload.is_empty() => Ok(payload),
        _ => Err(AudioError::MissingPayload),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_voice_parse_case_insensitive() {
        assert_eq!("kore".parse::<Voice>().unwrap(), Voice::Kore);
        assert_eq!("FENRIR".parse::<Voice>().unwrap(), Voice::Fenrir);
        let err = "alto".parse::<Voice>().unwrap_err();
        assert!(err.to_string().contains("alto"));
    }

    #[test]
    fn test_voice_file_name() {
        assert_eq!(Voice::Zephyr.file_name(), "voiceover_zephyr.wav");
        assert_eq!(Voice::default().file_name(), "voiceover_kore.wav");
    }

    #[test]
    fn test_render_voiceover_scenario() {
        let result = render_voiceover("AAD/fwCAAQA=", PcmLayout::default()).unwrap();
        assert_eq!(result.wav_data.len(), 52);
        assert_eq!(result.num_frames, 4);
        assert_eq!(result.sample_rate, 24000);
    }

    #[test]
    fn test_render_voiceover_rejects_bad_base64() {
        let err = render_voiceover("@@@@", PcmLayout::default()).unwrap_err();
        assert!(matches!(err, AudioError::Decode(_)));
    }

    #[test]
    fn test_package_voiceover() {
        let asset = package_voiceover("AAD/fwCAAQA=", PcmLayout::new(24000, 2), Voice::Charon)
            .unwrap();
        assert_eq!(asset.file_name, "voiceover_charon.wav");
        assert_eq!(asset.mime_type, "audio/wav");
        assert_eq!(asset.bytes().len(), 52);
        assert!(asset.wav.is_stereo());
    }

    #[test]
    fn test_require_payload() {
        assert_eq!(require_payload(Some(" AAAA\n")).unwrap(), "AAAA");
        assert!(matches!(
            require_payload(Some("   ")),
            Err(AudioError::MissingPayload)
        ));
        assert!(require_payload(None).is_err());
    }
}
