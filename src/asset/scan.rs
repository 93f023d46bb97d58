//! Filesystem scanning into the in-memory asset batch.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use jwalk::WalkDir;

use super::Asset;

/// Read every file under `source` into an in-memory asset batch.
///
/// Paths are sorted so batch order (and therefore tie-breaking in the depth
/// sort) is deterministic across runs.
pub fn scan_assets(source: &Path) -> Result<Vec<Asset>> {
    let mut paths: Vec<_> = WalkDir::new(source)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .map(|e| e.path())
        .collect();
    paths.sort();

    let mut assets = Vec::with_capacity(paths.len());
    for path in paths {
        let contents =
            fs::read(&path).with_context(|| format!("failed to read `{}`", path.display()))?;
        assets.push(Asset::new(source.to_path_buf(), path, contents));
    }
    Ok(assets)
}
