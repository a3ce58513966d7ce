//! WAV reading: chunk walking, PCM extraction and hashing.

use super::format::WavFormat;
use super::header::{parse_fmt_body, u32_at};
use crate::buffer::AudioBuffer;
use crate::error::{AudioError, AudioResult};
use crate::pcm::interpret_pcm16;

/// Borrowed view of a parsed WAV stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavView<'a> {
    /// Format from the `fmt ` chunk.
    pub format: WavFormat,
    /// Payload of the `data` chunk.
    pub data: &'a [u8],
}

impl WavView<'_> {
    /// Number of whole frames in the payload.
    pub fn frame_count(&self) -> usize {
        match self.format.block_align() {
            0 => 0,
            align => self.data.len() / usize::from(align),
        }
    }

    /// Duration in seconds.
    pub fn duration_seconds(&self) -> f64 {
        self.frame_count() as f64 / f64::from(self.format.sample_rate)
    }
}

/// Parses a RIFF/WAVE stream, skipping unknown chunks.
///
/// # Errors
/// Fails when the signature is missing, the `fmt ` chunk is absent or not
/// 16-bit PCM, or no complete `data` chunk follows it.
pub fn read_wav(wav_data: &[u8]) -> AudioResult<WavView<'_>> {
    if wav_data.len() < 12 {
        return Err(AudioError::invalid_wav("stream shorter than RIFF preamble"));
    }
    if &wav_data[0..4] != b"RIFF" || &wav_data[8..12] != b"WAVE" {
        return Err(AudioError::invalid_wav("missing RIFF/WAVE signature"));
    }

    let mut format = None;
    let mut pos = 12;
    while wav_data.len().saturating_sub(pos) >= 8 {
        let chunk_id = &wav_data[pos..pos + 4];
        let chunk_size = u32_at(wav_data, pos + 4) as usize;
        let body_start = pos + 8;
        let body_end = body_start.saturating_add(chunk_size);

        match chunk_id {
            b"fmt " => {
                if body_end > wav_data.len() {
                    return Err(AudioError::invalid_wav("truncated fmt chunk"));
                }
                format = Some(parse_fmt_body(&wav_data[body_start..body_end])?);
            }
            b"data" => {
                let format =
                    format.ok_or_else(|| AudioError::invalid_wav("data chunk before fmt chunk"))?;
                if body_end > wav_data.len() {
                    return Err(AudioError::invalid_wav(format!(
                        "data chunk declares {chunk_size} bytes, only {} present",
                        wav_data.len() - body_start
                    )));
                }
                return Ok(WavView {
                    format,
                    data: &wav_data[body_start..body_end],
                });
            }
            _ => {}
        }

        pos = body_end;
        // Align to word boundary
        if chunk_size % 2 != 0 {
            pos = pos.saturating_add(1);
        }
    }

    Err(AudioError::invalid_wav("no data chunk"))
}

/// Extracts PCM data from a WAV file buffer.
///
/// Used for comparing WAV files by their audio content only.
pub fn extract_pcm_data(wav_data: &[u8]) -> Option<&[u8]> {
    read_wav(wav_data).ok().map(|view| view.data)
}

/// Decodes a WAV stream into its format and interleaved 16-bit samples.
pub fn decode_wav(wav_data: &[u8]) -> AudioResult<(WavFormat, Vec<i16>)> {
    let view = read_wav(wav_data)?;
    let samples = view
        .data
        .chunks_exact(2)
        .map(|pair| i16::from_le_bytes([pair[0], pair[1]]))
        .collect();
    Ok((view.format, samples))
}

/// Decodes a WAV stream into a planar float [`AudioBuffer`].
pub fn decode_wav_to_buffer(wav_data: &[u8]) -> AudioResult<AudioBuffer> {
    let view = read_wav(wav_data)?;
    interpret_pcm16(view.data, view.format.sample_rate, view.format.channels)
}

/// Computes the PCM hash of a WAV file.
///
/// # Returns
/// BLAKE3 hash of PCM data, or None if format is invalid
pub fn compute_pcm_hash(wav_data: &[u8]) -> Option<String> {
    extract_pcm_data(wav_data).map(pcm_hash)
}

/// BLAKE3 hex digest of raw PCM bytes.
pub fn pcm_hash(pcm: &[u8]) -> String {
    blake3::hash(pcm).to_hex().to_string()
}
