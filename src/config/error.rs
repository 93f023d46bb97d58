//! Configuration error types.

use std::path::PathBuf;
use thiserror::Error;

/// Configuration-related errors, surfaced before any asset is processed.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("Config file parsing error")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid glob pattern")]
    Pattern(#[from] globset::Error),
}
