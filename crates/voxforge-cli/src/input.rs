//! Input loading for CLI commands.
//!
//! Reads base64 payloads from files or stdin, and resolves the PCM layout from
//! an optional JSON config file plus command-line overrides.

use anyhow::{Context, Result};
use std::fs;
use std::io::Read;
use std::path::Path;
use voxforge_audio::PcmLayout;

/// Path value that selects stdin.
pub const STDIN_PATH: &str = "-";

/// Reads a text payload from `path`, or from stdin when `path` is `-`.
pub fn read_payload(path: &str) -> Result<String> {
    if path == STDIN_PATH {
        let mut payload = String::new();
        std::io::stdin()
            .read_to_string(&mut payload)
            .context("Failed to read payload from stdin")?;
        return Ok(payload);
    }

    fs::read_to_string(path).with_context(|| format!("Failed to read payload file: {}", path))
}

/// Loads a [`PcmLayout`] from a JSON file.
///
/// Missing fields take their defaults (24000 Hz, mono).
pub fn load_layout_file(path: &Path) -> Result<PcmLayout> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    let layout: PcmLayout = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
    Ok(layout)
}

/// Resolves the effective layout: defaults, then config file, then flags.
pub fn resolve_layout(
    config: Option<&str>,
    sample_rate: Option<u32>,
    channels: Option<u16>,
) -> Result<PcmLayout> {
    let mut layout = match config {
        Some(path) => load_layout_file(Path::new(path))?,
        None => PcmLayout::default(),
    };

    if let Some(rate) = sample_rate {
        layout.sample_rate = rate;
    }
    if let Some(channels) = channels {
        layout.channels = channels;
    }

    Ok(layout)
}
