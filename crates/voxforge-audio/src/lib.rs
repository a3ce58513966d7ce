//! Voxforge Audio Core
//!
//! Turns the raw speech payload returned by a text-to-speech service into a
//! canonical, playable WAV file.
//!
//! # Overview
//!
//! The pipeline has three pure stages:
//!
//! - **Base64 decoding** - standard alphabet, padded, strict
//! - **PCM interpretation** - little-endian 16-bit interleaved samples become a
//!   planar [`AudioBuffer`] of `f32` values in [-1.0, 1.0)
//! - **WAV encoding** - a fixed 44-byte RIFF/WAVE header followed by the
//!   re-interleaved 16-bit payload
//!
//! # Determinism
//!
//! Encoding writes no timestamps or optional chunks. The same buffer always
//! yields the same bytes, and the BLAKE3 hash of the PCM payload identifies the
//! audio independently of its header.
//!
//! # Example
//!
//! ```
//! use voxforge_audio::{render_voiceover, PcmLayout};
//!
//! let wav = render_voiceover("AAD/fwCAAQA=", PcmLayout::default())?;
//! assert_eq!(wav.wav_data.len(), 44 + 4 * 2);
//! assert_eq!(&wav.wav_data[0..4], b"RIFF");
//! # Ok::<(), voxforge_audio::AudioError>(())
//! ```
//!
//! # Crate Structure
//!
//! - [`decode`] - Base64 transport decoding
//! - [`pcm`] - PCM16 frame interpretation and payload layout
//! - [`buffer`] - Planar float audio buffer
//! - [`wav`] - Canonical WAV writer and reader
//! - [`voiceover`] - End-to-end pipeline and asset naming

pub mod buffer;
pub mod decode;
pub mod error;
pub mod pcm;
pub mod voiceover;
pub mod wav;

// Re-export main types at crate root
pub use buffer::AudioBuffer;
pub use decode::{decode_base64, encode_base64};
pub use error::{AudioError, AudioResult};
pub use pcm::{interpret_pcm16, PcmLayout, DEFAULT_CHANNELS, DEFAULT_SAMPLE_RATE};
pub use voiceover::{package_voiceover, render_voiceover, Voice, VoiceoverAsset, WAV_MIME_TYPE};
pub use wav::{encode_wav, WavFormat, WavResult};
