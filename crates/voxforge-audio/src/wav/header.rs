//! Canonical 44-byte RIFF/WAVE header.

use super::format::WavFormat;
use crate::error::{AudioError, AudioResult};

/// Size of the canonical header in bytes.
pub const HEADER_SIZE: usize = 44;

/// Largest data chunk payload whose RIFF size still fits in a `u32`.
pub const MAX_DATA_SIZE: usize = u32::MAX as usize - (HEADER_SIZE - 8);

/// Size of the PCM `fmt ` chunk body.
const FMT_CHUNK_SIZE: u32 = 16;

/// `WAVE_FORMAT_PCM` format tag.
const FORMAT_PCM: u16 = 1;

/// Typed view of the canonical header: RIFF descriptor, `fmt ` chunk and the
/// `data` chunk preamble.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavHeader {
    /// Format parameters.
    pub format: WavFormat,
    /// Length of the data chunk payload in bytes.
    pub data_size: u32,
}

impl WavHeader {
    /// Header for `frames` frames of `format`.
    ///
    /// # Panics
    /// Panics if the payload exceeds [`MAX_DATA_SIZE`], which a RIFF header
    /// cannot describe.
    pub fn for_frames(format: WavFormat, frames: usize) -> Self {
        let data_size = format.data_size(frames);
        assert!(
            data_size <= MAX_DATA_SIZE,
            "WAV payload of {data_size} bytes exceeds the RIFF limit of {MAX_DATA_SIZE}"
        );
        Self {
            format,
            data_size: data_size as u32,
        }
    }

    /// Total stream length (header plus payload).
    pub fn total_size(&self) -> usize {
        HEADER_SIZE + self.data_size as usize
    }

    /// RIFF chunk size: total length minus the 8-byte RIFF preamble.
    pub fn riff_size(&self) -> u32 {
        self.data_size.saturating_add(HEADER_SIZE as u32 - 8)
    }

    /// Number of whole frames in the payload.
    pub fn frame_count(&self) -> usize {
        match self.format.block_align() {
            0 => 0,
            align => self.data_size as usize / usize::from(align),
        }
    }

    /// Serializes the header field by field at fixed offsets.
    pub fn to_bytes(&self) -> [u8; HEADER_SIZE] {
        let mut out = [0u8; HEADER_SIZE];
        let fmt = &self.format;

        out[0..4].copy_from_slice(b"RIFF");
        out[4..8].copy_from_slice(&self.riff_size().to_le_bytes());
        out[8..12].copy_from_slice(b"WAVE");

        out[12..16].copy_from_slice(b"fmt ");
        out[16..20].copy_from_slice(&FMT_CHUNK_SIZE.to_le_bytes());
        out[20..22].copy_from_slice(&FORMAT_PCM.to_le_bytes());
        out[22..24].copy_from_slice(&fmt.channels.to_le_bytes());
        out[24..28].copy_from_slice(&fmt.sample_rate.to_le_bytes());
        out[28..32].copy_from_slice(&fmt.byte_rate().to_le_bytes());
        out[32..34].copy_from_slice(&fmt.block_align().to_le_bytes());
        out[34..36].copy_from_slice(&fmt.bits_per_sample.to_le_bytes());

        out[36..40].copy_from_slice(b"data");
        out[40..44].copy_from_slice(&self.data_size.to_le_bytes());

        out
    }

    /// Parses a canonical header from the first 44 bytes of `bytes`.
    ///
    /// Only the exact layout produced by [`to_bytes`](Self::to_bytes) is
    /// accepted; use [`read_wav`](super::read_wav) for files with extra chunks.
    pub fn parse(bytes: &[u8]) -> AudioResult<Self> {
        if bytes.len() < HEADER_SIZE {
            return Err(AudioError::invalid_wav(format!(
                "header needs {HEADER_SIZE} bytes, got {}",
                bytes.len()
            )));
        }
        if &bytes[0..4] != b"RIFF" || &bytes[8..12] != b"WAVE" {
            return Err(AudioError::invalid_wav("missing RIFF/WAVE signature"));
        }
        if &bytes[12..16] != b"fmt " || u32_at(bytes, 16) != FMT_CHUNK_SIZE {
            return Err(AudioError::invalid_wav("expected a 16-byte fmt chunk at offset 12"));
        }
        if &bytes[36..40] != b"data" {
            return Err(AudioError::invalid_wav("expected data chunk at offset 36"));
        }

        let format = parse_fmt_body(&bytes[20..36])?;
        Ok(Self {
            format,
            data_size: u32_at(bytes, 40),
        })
    }
}

/// Validates a 16-byte PCM `fmt ` chunk body.
pub(crate) fn parse_fmt_body(body: &[u8]) -> AudioResult<WavFormat> {
    if body.len() < FMT_CHUNK_SIZE as usize {
        return Err(AudioError::invalid_wav("fmt chunk too short"));
    }

    let format_tag = u16_at(body, 0);
    if format_tag != FORMAT_PCM {
        return Err(AudioError::invalid_wav(format!(
            "unsupported format tag {format_tag}, only PCM is supported"
        )));
    }

    let format = WavFormat {
        channels: u16_at(body, 2),
        sample_rate: u32_at(body, 4),
        bits_per_sample: u16_at(body, 14),
    };
    format.validate()?;
    Ok(format)
}

pub(crate) fn u16_at(bytes: &[u8], offset: usize) -> u16 {
    u16::from_le_bytes([bytes[offset], bytes[offset + 1]])
}

pub(crate) fn u32_at(bytes: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes([
        bytes[offset],
        bytes[offset + 1],
        bytes[offset + 2],
        bytes[offset + 3],
    ])
}
