//! Core WAV writing and PCM conversion functions.

use std::io::{self, Write};

use super::format::WavFormat;
use super::header::{WavHeader, HEADER_SIZE};
use crate::buffer::AudioBuffer;

/// Converts a float sample to a signed 16-bit value.
///
/// The sample is clamped to [-1, 1], then scaled by 32768 when negative and by
/// 32767 otherwise, and truncated toward zero. `1.0` maps to `32767` and
/// `-1.0` to `-32768`. NaN maps to `0`.
#[inline]
pub fn sample_to_i16(sample: f32) -> i16 {
    let clipped = sample.clamp(-1.0, 1.0);
    let scaled = if clipped < 0.0 {
        clipped * 32768.0
    } else {
        clipped * 32767.0
    };
    // `as` truncates toward zero and saturates; NaN becomes 0.
    scaled as i16
}

/// Writes a complete WAV file to a writer.
///
/// # Arguments
/// * `writer` - Output writer
/// * `format` - WAV format parameters, expected to pass [`WavFormat::validate`]
/// * `pcm_data` - Interleaved little-endian 16-bit samples
pub fn write_wav<W: Write>(writer: &mut W, format: &WavFormat, pcm_data: &[u8]) -> io::Result<()> {
    let (header, payload) = frame_payload(format, pcm_data);

    writer.write_all(&header.to_bytes())?;
    writer.write_all(payload)?;

    Ok(())
}

/// Writes a WAV file to a byte vector.
///
/// Trailing bytes that do not fill a whole frame are not written.
pub fn write_wav_to_vec(format: &WavFormat, pcm_data: &[u8]) -> Vec<u8> {
    let (header, payload) = frame_payload(format, pcm_data);

    let mut buffer = Vec::with_capacity(header.total_size());
    buffer.extend_from_slice(&header.to_bytes());
    buffer.extend_from_slice(payload);
    buffer
}

/// Header for the whole frames in `pcm_data`, and the bytes it covers.
fn frame_payload<'a>(format: &WavFormat, pcm_data: &'a [u8]) -> (WavHeader, &'a [u8]) {
    let frames = match format.block_align() {
        0 => 0,
        align => pcm_data.len() / usize::from(align),
    };
    let header = WavHeader::for_frames(*format, frames);
    (header, &pcm_data[..header.data_size as usize])
}

/// Converts interleaved float samples to 16-bit PCM bytes.
pub fn samples_to_pcm16(samples: &[f32]) -> Vec<u8> {
    let mut pcm = Vec::with_capacity(samples.len() * 2);
    for &sample in samples {
        pcm.extend_from_slice(&sample_to_i16(sample).to_le_bytes());
    }
    pcm
}

/// Converts a buffer to interleaved 16-bit PCM bytes, frame by frame.
pub fn buffer_to_pcm16(buffer: &AudioBuffer) -> Vec<u8> {
    let channels = usize::from(buffer.number_of_channels());
    let mut pcm = Vec::with_capacity(buffer.len() * channels * 2);
    for sample in buffer.interleaved() {
        pcm.extend_from_slice(&sample_to_i16(sample).to_le_bytes());
    }
    pcm
}

/// Encodes a buffer as a canonical 16-bit PCM WAV stream.
///
/// The output is exactly `44 + frames * channels * 2` bytes long.
pub fn encode_wav(buffer: &AudioBuffer) -> Vec<u8> {
    let format = WavFormat::pcm16(buffer.number_of_channels(), buffer.sample_rate());
    let header = WavHeader::for_frames(format, buffer.len());

    let mut out = Vec::with_capacity(header.total_size());
    out.extend_from_slice(&header.to_bytes());
    for sample in buffer.interleaved() {
        out.extend_from_slice(&sample_to_i16(sample).to_le_bytes());
    }

    debug_assert_eq!(out.len(), HEADER_SIZE + header.data_size as usize);
    out
}
