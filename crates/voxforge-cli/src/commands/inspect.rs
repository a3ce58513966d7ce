//! Inspect command implementation
//!
//! Reads a WAV file and reports its format, length and PCM hash.

use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;
use std::process::ExitCode;
use voxforge_audio::wav::{read_wav, WavHeader, HEADER_SIZE};

use super::json_output::{error_codes, InspectOutput, JsonError};

/// Run the inspect command
///
/// # Arguments
/// * `input` - Path to the WAV file
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 success, 1 error
pub fn run(input: &str, json_output: bool) -> Result<ExitCode> {
    let bytes = match fs::read(input) {
        Ok(bytes) => bytes,
        Err(e) if json_output => {
            let error = JsonError::new(error_codes::FILE_READ, e.to_string()).with_file(input);
            return print_json(&InspectOutput::failure(input, vec![error]), false);
        }
        Err(e) => {
            return Err(e).with_context(|| format!("Failed to read WAV file: {}", input));
        }
    };

    let view = match read_wav(&bytes) {
        Ok(view) => view,
        Err(e) if json_output => {
            let error = JsonError::from(&e).with_file(input);
            return print_json(&InspectOutput::failure(input, vec![error]), false);
        }
        Err(e) => return Err(e).with_context(|| format!("Failed to parse WAV file: {}", input)),
    };

    if json_output {
        return print_json(&InspectOutput::success(input, &view, bytes.len()), true);
    }

    let format = view.format;
    println!("{} {}", "Inspecting:".cyan().bold(), input);
    println!("  {:<14} {}", "Channels:".dimmed(), format.channels);
    println!("  {:<14} {} Hz", "Sample rate:".dimmed(), format.sample_rate);
    println!("  {:<14} {}", "Bit depth:".dimmed(), format.bits_per_sample);
    println!("  {:<14} {}", "Frames:".dimmed(), view.frame_count());
    println!("  {:<14} {:.3}s", "Duration:".dimmed(), view.duration_seconds());
    println!("  {:<14} {} bytes", "Size:".dimmed(), bytes.len());
    println!(
        "  {:<14} {}",
        "PCM hash:".dimmed(),
        voxforge_audio::wav::pcm_hash(view.data)
    );

    if WavHeader::parse(&bytes).is_ok() && bytes.len() == HEADER_SIZE + view.data.len() {
        println!("{} Canonical 44-byte header", "OK".green().bold());
    } else {
        println!(
            "{} Non-canonical layout (extra chunks or trailing bytes)",
            "NOTE".yellow().bold()
        );
    }

    Ok(ExitCode::SUCCESS)
}

fn print_json(output: &InspectOutput, success: bool) -> Result<ExitCode> {
    println!("{}", serde_json::to_string_pretty(output)?);
    Ok(if success {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    })
}
