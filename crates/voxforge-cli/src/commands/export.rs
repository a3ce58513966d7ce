//! Export command implementation
//!
//! Extracts the PCM16 payload of a WAV file and prints it as base64, the
//! inverse of `encode`.

use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;
use std::process::ExitCode;
use voxforge_audio::encode_base64;
use voxforge_audio::wav::read_wav;

/// Run the export command
///
/// # Arguments
/// * `input` - Path to the WAV file
/// * `output` - Output file path (default: stdout)
///
/// # Returns
/// Exit code: 0 success, 1 error
pub fn run(input: &str, output: Option<&str>) -> Result<ExitCode> {
    let bytes = fs::read(input).with_context(|| format!("Failed to read WAV file: {}", input))?;
    let encoded = export_payload(&bytes)
        .with_context(|| format!("Failed to parse WAV file: {}", input))?;

    match output {
        Some(path) => {
            fs::write(path, &encoded)
                .with_context(|| format!("Failed to write to: {}", path))?;
            eprintln!("{} Exported to: {}", "SUCCESS".green().bold(), path);
        }
        None => println!("{}", encoded),
    }

    Ok(ExitCode::SUCCESS)
}

/// Base64 of the `data` chunk of a WAV stream.
pub fn export_payload(wav: &[u8]) -> voxforge_audio::AudioResult<String> {
    let view = read_wav(wav)?;
    Ok(encode_base64(view.data))
}
