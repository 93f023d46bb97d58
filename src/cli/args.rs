//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Filerev content fingerprinting CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Enable verbose debug output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Config file path (default: filerev.toml)
    #[arg(short = 'C', long, default_value = "filerev.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Fingerprint assets and rewrite references between them
    #[command(visible_alias = "b")]
    Build {
        #[command(flatten)]
        build_args: BuildArgs,
    },
}

/// Build command arguments
#[derive(clap::Args, Debug, Clone)]
pub struct BuildArgs {
    /// Source directory containing the assets to process
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub source: Option<PathBuf>,

    /// Output directory for the rewritten assets
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub output: Option<PathBuf>,

    /// Base directory for served paths (defaults to the source directory)
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub base: Option<PathBuf>,

    /// Manifest file path, relative to the output directory
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub manifest: Option<PathBuf>,
}
