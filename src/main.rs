//! Filerev - content fingerprinting and reference rewriting for static assets.

mod asset;
mod cli;
mod config;
mod logger;
mod manifest;
mod pipeline;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::FilerevConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    logger::set_verbose(cli.verbose);

    let config = FilerevConfig::load(&cli)?;

    match &cli.command {
        Commands::Build { .. } => cli::build::run(&config),
    }
}
