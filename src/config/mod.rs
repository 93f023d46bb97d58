//! Configuration management for `filerev.toml`.
//!
//! # Sections
//!
//! | Section   | Purpose                                              |
//! |-----------|------------------------------------------------------|
//! | `[build]` | Paths, pattern sets, and the manifest location       |
//!
//! CLI arguments override the file; glob patterns are compiled during load
//! so a malformed pattern fails before any asset is read.

mod error;

pub use error::ConfigError;

use std::fs;
use std::path::PathBuf;

use globset::{Glob, GlobSet, GlobSetBuilder};
use serde::{Deserialize, Serialize};

use crate::cli::{BuildArgs, Cli, Commands};
use crate::manifest::DEFAULT_MANIFEST_PATH;
use crate::pipeline::RunOptions;

/// Root configuration structure representing filerev.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilerevConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Build settings
    #[serde(default)]
    pub build: BuildConfig,
}

/// `[build]` section: paths and pattern sets.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    /// Source directory scanned for assets
    pub source: PathBuf,

    /// Output directory for the rewritten assets
    pub output: PathBuf,

    /// Base directory for served paths (defaults to the source directory)
    pub base: Option<PathBuf>,

    /// Glob patterns selecting fingerprint-eligible assets
    pub fingerprint: Vec<String>,

    /// Glob patterns selecting replace-eligible assets
    pub replace: Vec<String>,

    /// Manifest file path; relative paths resolve under the output directory
    pub manifest: PathBuf,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            source: PathBuf::from("assets"),
            output: PathBuf::from("dist"),
            base: None,
            fingerprint: vec!["**/*".to_string()],
            replace: vec!["**/*".to_string()],
            manifest: PathBuf::from(DEFAULT_MANIFEST_PATH),
        }
    }
}

impl FilerevConfig {
    /// Load configuration from the CLI-specified file and apply CLI
    /// overrides.
    ///
    /// A missing config file is not an error (defaults apply); a malformed
    /// file or glob pattern is.
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let mut config = if cli.config.exists() {
            let raw = fs::read_to_string(&cli.config)
                .map_err(|e| ConfigError::Io(cli.config.clone(), e))?;
            toml::from_str(&raw)?
        } else {
            Self::default()
        };
        config.config_path = cli.config.clone();
        config.apply_cli(cli);

        // Surfaces malformed patterns before any asset is read
        config.run_options()?;
        Ok(config)
    }

    fn apply_cli(&mut self, cli: &Cli) {
        match &cli.command {
            Commands::Build { build_args } => self.apply_build_args(build_args),
        }
    }

    fn apply_build_args(&mut self, args: &BuildArgs) {
        if let Some(source) = &args.source {
            self.build.source = source.clone();
        }
        if let Some(output) = &args.output {
            self.build.output = output.clone();
        }
        if let Some(base) = &args.base {
            self.build.base = Some(base.clone());
        }
        if let Some(manifest) = &args.manifest {
            self.build.manifest = manifest.clone();
        }
    }

    /// Compile the configured pattern sets into pipeline run options.
    pub fn run_options(&self) -> Result<RunOptions, ConfigError> {
        Ok(RunOptions {
            filerev: compile_patterns(&self.build.fingerprint)?,
            replace: compile_patterns(&self.build.replace)?,
            base: self.build.base.clone(),
        })
    }

    /// Manifest location, resolved against the output directory.
    pub fn manifest_path(&self) -> PathBuf {
        self.build.output.join(&self.build.manifest)
    }
}

fn compile_patterns(patterns: &[String]) -> Result<GlobSet, ConfigError> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        builder.add(Glob::new(pattern)?);
    }
    Ok(builder.build()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn test_defaults_when_no_config_file() {
        let cli = cli(&["filerev", "-C", "does-not-exist.toml", "build"]);
        let config = FilerevConfig::load(&cli).unwrap();

        assert_eq!(config.build.source, PathBuf::from("assets"));
        assert_eq!(config.build.output, PathBuf::from("dist"));
        assert_eq!(config.build.fingerprint, ["**/*"]);
        assert_eq!(config.build.replace, ["**/*"]);
        assert_eq!(
            config.manifest_path(),
            PathBuf::from("dist").join(DEFAULT_MANIFEST_PATH)
        );
    }

    #[test]
    fn test_load_from_toml() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("filerev.toml");
        fs::write(
            &path,
            r#"
[build]
source = "public"
fingerprint = ["*.{gif,css}"]
replace = ["*.html"]
"#,
        )
        .unwrap();

        let cli = cli(&["filerev", "-C", path.to_str().unwrap(), "build"]);
        let config = FilerevConfig::load(&cli).unwrap();

        assert_eq!(config.build.source, PathBuf::from("public"));
        assert_eq!(config.build.fingerprint, ["*.{gif,css}"]);
        assert_eq!(config.build.replace, ["*.html"]);
        // Unset fields keep their defaults
        assert_eq!(config.build.output, PathBuf::from("dist"));
    }

    #[test]
    fn test_cli_overrides_file() {
        let cli = cli(&[
            "filerev",
            "-C",
            "does-not-exist.toml",
            "build",
            "--source",
            "www",
            "--output",
            "out",
        ]);
        let config = FilerevConfig::load(&cli).unwrap();

        assert_eq!(config.build.source, PathBuf::from("www"));
        assert_eq!(config.build.output, PathBuf::from("out"));
    }

    #[test]
    fn test_malformed_pattern_fails_at_load() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("filerev.toml");
        fs::write(&path, "[build]\nfingerprint = [\"a{b\"]\n").unwrap();

        let cli = cli(&["filerev", "-C", path.to_str().unwrap(), "build"]);
        let err = FilerevConfig::load(&cli).unwrap_err();
        assert!(matches!(err, ConfigError::Pattern(_)));
    }

    #[test]
    fn test_run_options_compile() {
        let cli = cli(&["filerev", "-C", "does-not-exist.toml", "build"]);
        let config = FilerevConfig::load(&cli).unwrap();
        let options = config.run_options().unwrap();

        assert!(options.filerev.is_match("css/style.css"));
        assert!(options.replace.is_match("index.html"));
        assert!(options.base.is_none());
    }
}
