//! CLI argument definitions for the Voxforge command-line interface.
//!
//! All `#[derive(Parser)]` and `#[derive(Subcommand)]` types are defined here,
//! keeping `main.rs` focused on dispatch logic.

use clap::{Parser, Subcommand};
use voxforge_audio::Voice;

/// Voxforge - Voiceover PCM to WAV export
#[derive(Parser)]
#[command(name = "voxforge")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Encode a base64 PCM16 payload into a WAV file
    Encode {
        /// Path to the base64 payload (`-` reads stdin)
        #[arg(short, long)]
        input: String,

        /// Output WAV path (default: voiceover_<voice>.wav in --out-dir)
        #[arg(short, long)]
        output: Option<String>,

        /// Directory for the default output file name
        #[arg(long)]
        out_dir: Option<String>,

        /// JSON file with `sample_rate` and `channels`
        #[arg(long)]
        config: Option<String>,

        /// Sample rate in Hz (default: 24000)
        #[arg(long)]
        sample_rate: Option<u32>,

        /// Number of interleaved channels (default: 1)
        #[arg(long)]
        channels: Option<u16>,

        /// Voice the payload was generated with (kore, puck, charon, zephyr, fenrir)
        #[arg(long, default_value = "kore")]
        voice: Voice,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Print format and hash information for a WAV file
    Inspect {
        /// Path to the WAV file
        #[arg(short, long)]
        input: String,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Print the PCM16 payload of a WAV file as base64
    Export {
        /// Path to the WAV file
        #[arg(short, long)]
        input: String,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<String>,
    },
}
