//! Canonical WAV encoding and reading.
//!
//! This module writes 16-bit PCM WAV files with a fixed 44-byte header and no
//! extension chunks, so identical audio always produces identical bytes. The
//! hash of the PCM payload identifies the audio independently of the header.

mod format;
mod header;
mod read;
mod result;
mod writer;


// Re-export public API
pub use format::{WavFormat, MAX_CHANNELS};
pub use header::{WavHeader, HEADER_SIZE, MAX_DATA_SIZE};
pub use read::{
    compute_pcm_hash, decode_wav, decode_wav_to_buffer, extract_pcm_data, pcm_hash, read_wav,
    WavView,
};
pub use result::WavResult;
pub use writer::{
    buffer_to_pcm16, encode_wav, sample_to_i16, samples_to_pcm16, write_wav, write_wav_to_vec,
};
