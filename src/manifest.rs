//! Manifest of original to fingerprinted relative paths.
//!
//! Observes the rename records carried by the emitted batch and serializes
//! them as a pretty-printed JSON mapping. Only assets that were actually
//! renamed appear; entry order follows the emission order of the batch.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde_json::{Map, Value};

use crate::asset::Asset;

/// Default manifest location, relative to the output directory.
pub const DEFAULT_MANIFEST_PATH: &str = "filerev-replace-manifest.json";

/// Mapping from original relative path to fingerprinted relative path.
#[derive(Debug, Default)]
pub struct Manifest {
    entries: Map<String, Value>,
}

impl Manifest {
    /// Collect rename records from an emitted batch.
    pub fn from_batch(assets: &[Asset]) -> Self {
        let mut manifest = Self::default();
        for asset in assets {
            if let Some(old) = asset.prior_relative() {
                manifest.record(old, &asset.relative());
            }
        }
        manifest
    }

    /// Record a single rename.
    pub fn record(&mut self, old: &Path, new: &Path) {
        self.entries.insert(
            old.to_string_lossy().into_owned(),
            Value::String(new.to_string_lossy().into_owned()),
        );
    }

    /// Number of renamed assets.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether any asset was renamed.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Serialize as pretty-printed JSON to `path`.
    pub fn write(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(&Value::Object(self.entries.clone()))?;
        fs::write(path, json).with_context(|| format!("failed to write `{}`", path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_from_batch_skips_unrenamed() {
        let renamed = {
            let mut a = Asset::new(
                PathBuf::from("/site"),
                PathBuf::from("/site/style.css"),
                b"body {}".to_vec(),
            );
            a.rename_to(PathBuf::from("style-a1b2c3d4.css"));
            a
        };
        let untouched = Asset::new(
            PathBuf::from("/site"),
            PathBuf::from("/site/index.html"),
            b"<html></html>".to_vec(),
        );

        let manifest = Manifest::from_batch(&[renamed, untouched]);
        assert_eq!(manifest.len(), 1);
    }

    #[test]
    fn test_write_pretty_json_in_emission_order() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("manifest.json");

        let mut manifest = Manifest::default();
        manifest.record(Path::new("styles.css"), Path::new("styles-a1b2c3d4.css"));
        manifest.record(Path::new("index.html"), Path::new("index-0badf00d.html"));
        manifest.write(&path).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(
            written,
            "{\n  \"styles.css\": \"styles-a1b2c3d4.css\",\n  \"index.html\": \"index-0badf00d.html\"\n}"
        );
    }

    #[test]
    fn test_empty_manifest() {
        let manifest = Manifest::default();
        assert!(manifest.is_empty());
    }
}
