//! Test fixture utilities for synthetic speech payloads.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use voxforge_audio::encode_base64;

/// The 8-byte mono payload used throughout the tests:
/// samples `0, 32767, -32768, 1`.
pub const SCENARIO_PCM: [u8; 8] = [0x00, 0x00, 0xFF, 0x7F, 0x00, 0x80, 0x01, 0x00];

/// Base64 of [`SCENARIO_PCM`].
pub const SCENARIO_BASE64: &str = "AAD/fwCAAQA=";

/// Interleaved PCM16 bytes of a sine tone, same value on every channel.
pub fn sine_pcm16(frames: usize, channels: u16, sample_rate: u32, freq: f32) -> Vec<u8> {
    let mut pcm = Vec::with_capacity(frames * usize::from(channels) * 2);
    for i in 0..frames {
        let t = i as f32 / sample_rate as f32;
        let value = ((t * freq * std::f32::consts::TAU).sin() * 0.8 * 32767.0) as i16;
        for _ in 0..channels {
            pcm.extend_from_slice(&value.to_le_bytes());
        }
    }
    pcm
}

/// Interleaved PCM16 bytes from explicit samples.
pub fn pcm16_from_samples(samples: &[i16]) -> Vec<u8> {
    samples.iter().flat_map(|s| s.to_le_bytes()).collect()
}

/// Base64 payload of a sine tone, as a speech service would return it.
pub fn sine_payload(frames: usize, channels: u16, sample_rate: u32) -> String {
    encode_base64(&sine_pcm16(frames, channels, sample_rate, 220.0))
}

/// Temporary directory holding payload files and CLI outputs.
pub struct PayloadFixture {
    pub root: TempDir,
}

impl PayloadFixture {
    /// Create a new empty fixture directory.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp dir");
        Self { root }
    }

    /// Get the fixture root path.
    pub fn path(&self) -> &Path {
        self.root.path()
    }

    /// Write a base64 payload file and return its path.
    pub fn add_payload(&self, name: &str, payload: &str) -> PathBuf {
        let path = self.root.path().join(format!("{}.b64", name));
        fs::write(&path, payload).expect("Failed to write payload file");
        path
    }

    /// Write a JSON layout config and return its path.
    pub fn add_config(&self, sample_rate: u32, channels: u16) -> PathBuf {
        let path = self.root.path().join("layout.json");
        let content = format!(
            r#"{{"sample_rate": {}, "channels": {}}}"#,
            sample_rate, channels
        );
        fs::write(&path, content).expect("Failed to write config file");
        path
    }
}

impl Default for PayloadFixture {
    fn default() -> Self {
        Self::new()
    }
}
