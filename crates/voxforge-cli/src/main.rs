//! Voxforge CLI - Command-line interface for voiceover WAV export
//!
//! This binary turns base64 PCM16 speech payloads into WAV files and inspects
//! or exports existing ones.

use clap::Parser;
use std::process::ExitCode;

use voxforge_cli::commands;
use voxforge_cli::commands::encode::EncodeOptions;
use voxforge_cli::input::resolve_layout;

mod cli_args;

use cli_args::{Cli, Commands};

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Encode {
            input,
            output,
            out_dir,
            config,
            sample_rate,
            channels,
            voice,
            json,
        } => match resolve_layout(config.as_deref(), sample_rate, channels) {
            Ok(layout) => commands::encode::run(&EncodeOptions {
                input: &input,
                output: output.as_deref(),
                out_dir: out_dir.as_deref(),
                layout,
                voice,
                json,
            }),
            Err(e) if json => commands::encode::config_failure(&e, config.as_deref()),
            Err(e) => Err(e),
        },
        Commands::Inspect { input, json } => commands::inspect::run(&input, json),
        Commands::Export { input, output } => commands::export::run(&input, output.as_deref()),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
