//! Encode command implementation
//!
//! Converts a base64 PCM16 payload (as returned by a speech service) into a
//! canonical WAV file.

use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use voxforge_audio::voiceover::require_payload;
use voxforge_audio::{package_voiceover, PcmLayout, Voice, VoiceoverAsset};

use super::json_output::{error_codes, EncodeOutput, JsonError};
use crate::input::read_payload;

/// Options for the encode command.
#[derive(Debug, Clone)]
pub struct EncodeOptions<'a> {
    /// Payload path, or `-` for stdin
    pub input: &'a str,
    /// Output WAV path (default: `<out_dir>/voiceover_<voice>.wav`)
    pub output: Option<&'a str>,
    /// Directory for the default file name
    pub out_dir: Option<&'a str>,
    /// Declared PCM layout
    pub layout: PcmLayout,
    /// Voice used for the default file name
    pub voice: Voice,
    /// Emit JSON instead of colored text
    pub json: bool,
}

/// Run the encode command
///
/// # Returns
/// Exit code: 0 success, 1 error
pub fn run(options: &EncodeOptions<'_>) -> Result<ExitCode> {
    if !options.json {
        println!("{} {}", "Encoding:".cyan().bold(), options.input);
        println!(
            "  {} {} Hz, {} channel(s), voice {}",
            "Layout:".dimmed(),
            options.layout.sample_rate,
            options.layout.channels,
            options.voice
        );
    }

    let payload = match read_payload(options.input) {
        Ok(payload) => payload,
        Err(e) if options.json => {
            let error = JsonError::new(error_codes::FILE_READ, format!("{:#}", e))
                .with_file(options.input);
            return print_failure(error);
        }
        Err(e) => return Err(e),
    };

    let asset = match encode_payload(&payload, options.layout, options.voice) {
        Ok(asset) => asset,
        Err(e) if options.json => {
            return print_failure(JsonError::from(&e).with_file(options.input));
        }
        Err(e) => {
            return Err(e).with_context(|| format!("Failed to encode payload: {}", options.input))
        }
    };

    let output_path = output_path(options, &asset);
    if let Err(e) = write_asset(&output_path, &asset) {
        if options.json {
            let error = JsonError::new(error_codes::FILE_WRITE, format!("{:#}", e))
                .with_file(output_path.display().to_string());
            return print_failure(error);
        }
        return Err(e);
    }

    if options.json {
        let output = EncodeOutput::success(output_path.display().to_string(), &asset);
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        let wav = &asset.wav;
        println!(
            "{} Wrote {} ({} frames, {:.3}s, {} bytes)",
            "SUCCESS".green().bold(),
            output_path.display(),
            wav.num_frames,
            wav.duration_seconds(),
            wav.wav_data.len()
        );
        println!("  {} {}", "PCM hash:".dimmed(), wav.pcm_hash);
    }

    Ok(ExitCode::SUCCESS)
}

/// Runs the audio pipeline on a loaded payload.
pub fn encode_payload(
    payload: &str,
    layout: PcmLayout,
    voice: Voice,
) -> voxforge_audio::AudioResult<VoiceoverAsset> {
    let payload = require_payload(Some(payload))?;
    package_voiceover(payload, layout, voice)
}

fn output_path(options: &EncodeOptions<'_>, asset: &VoiceoverAsset) -> PathBuf {
    match options.output {
        Some(path) => PathBuf::from(path),
        None => Path::new(options.out_dir.unwrap_or(".")).join(&asset.file_name),
    }
}

fn write_asset(path: &Path, asset: &VoiceoverAsset) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    fs::write(path, asset.bytes())
        .with_context(|| format!("Failed to write WAV file: {}", path.display()))
}

/// Reports a config resolution failure as JSON.
pub fn config_failure(err: &anyhow::Error, config: Option<&str>) -> Result<ExitCode> {
    let mut error = JsonError::new(error_codes::CONFIG, format!("{:#}", err));
    if let Some(path) = config {
        error = error.with_file(path);
    }
    print_failure(error)
}

fn print_failure(error: JsonError) -> Result<ExitCode> {
    let output = EncodeOutput::failure(vec![error]);
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(ExitCode::from(1))
}
