//! Asset output with side effects (writing the finalized batch).

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use super::Asset;

/// Write the finalized batch under `output`, creating parent directories.
///
/// Streamed assets never reach this point; the pipeline rejects them before
/// any rewriting happens.
pub fn write_assets(assets: &[Asset], output: &Path) -> Result<()> {
    for asset in assets {
        let Some(contents) = asset.contents() else {
            continue;
        };
        let dest = output.join(asset.relative());
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&dest, contents)
            .with_context(|| format!("failed to write `{}`", dest.display()))?;
    }
    Ok(())
}
