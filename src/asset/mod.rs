//! In-memory asset model and filesystem collaborators.

mod kind;
mod process;
mod scan;

pub use kind::ContentKind;
pub use process::write_assets;
pub use scan::scan_assets;

use std::path::{Path, PathBuf};

/// A single asset flowing through the pipeline.
///
/// Identity is the path relative to `base`. Content is mutable until the
/// rewrite stage emits the batch; the path is mutated at most once, when the
/// asset is fingerprinted.
#[derive(Debug, Clone)]
pub struct Asset {
    /// Base directory served paths are computed against.
    base: PathBuf,
    /// Full path of the asset (under `base`).
    path: PathBuf,
    /// Raw content.
    contents: Contents,
    /// Relative path before fingerprinting, set once renamed.
    prior_relative: Option<PathBuf>,
}

/// Asset content representation.
///
/// `Streamed` models content that is not materialized in memory; the
/// pipeline rejects it outright.
#[derive(Debug, Clone)]
enum Contents {
    Buffer(Vec<u8>),
    Streamed,
}

impl Asset {
    /// Create a buffered asset.
    pub fn new(base: PathBuf, path: PathBuf, contents: Vec<u8>) -> Self {
        Self {
            base,
            path,
            contents: Contents::Buffer(contents),
            prior_relative: None,
        }
    }

    /// Create an asset whose content is not materialized in memory.
    ///
    /// The pipeline rejects these outright; the constructor exists so
    /// upstream producers can hand their inputs over unconditionally.
    #[allow(dead_code)] // Exercised by pipeline tests
    pub fn streamed(base: PathBuf, path: PathBuf) -> Self {
        Self {
            base,
            path,
            contents: Contents::Streamed,
            prior_relative: None,
        }
    }

    /// Path relative to the asset's own base.
    fn relative_path(&self) -> &Path {
        self.path.strip_prefix(&self.base).unwrap_or(&self.path)
    }

    /// Path relative to the asset's own base, owned.
    pub fn relative(&self) -> PathBuf {
        self.relative_path().to_path_buf()
    }

    /// Identity of the asset: its relative path as a string.
    pub fn relative_id(&self) -> String {
        self.relative_path().to_string_lossy().into_owned()
    }

    /// Web-absolute path the asset is served at.
    ///
    /// `/` + path relative to `base_override`, or to the asset's own base
    /// when no override is configured or the override is not a prefix.
    pub fn served_path(&self, base_override: Option<&Path>) -> String {
        let relative = base_override
            .and_then(|base| self.path.strip_prefix(base).ok())
            .unwrap_or_else(|| self.relative_path());
        format!("/{}", relative.display())
    }

    /// Raw content, or `None` when the content is not materialized.
    pub fn contents(&self) -> Option<&[u8]> {
        match &self.contents {
            Contents::Buffer(bytes) => Some(bytes),
            Contents::Streamed => None,
        }
    }

    /// Replace the content buffer.
    pub fn set_contents(&mut self, bytes: Vec<u8>) {
        self.contents = Contents::Buffer(bytes);
    }

    /// Rename the asset, recording the prior relative path for the manifest.
    ///
    /// Called at most once per run, when the asset is fingerprinted.
    pub fn rename_to(&mut self, new_relative: PathBuf) {
        self.prior_relative = Some(self.relative());
        self.path = self.base.join(new_relative);
    }

    /// Relative path the asset had before fingerprinting, if renamed.
    pub fn prior_relative(&self) -> Option<&Path> {
        self.prior_relative.as_deref()
    }
}
