//! Path helpers for fingerprinted filenames.

use std::path::{Path, PathBuf};

/// Rebuild a filename with a fingerprint inserted before the extension.
///
/// `css/style.css` + `a1b2c3d4` -> `css/style-a1b2c3d4.css`
pub fn with_fingerprint(path: &Path, hash: &str) -> PathBuf {
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or_default();
    let name = match path.extension().and_then(|e| e.to_str()) {
        Some(ext) => format!("{stem}-{hash}.{ext}"),
        None => format!("{stem}-{hash}"),
    };
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.join(name),
        _ => PathBuf::from(name),
    }
}
