//! Build orchestration: scan, fingerprint, write, manifest.

use anyhow::{Context, Result};

use crate::asset::{scan_assets, write_assets};
use crate::config::FilerevConfig;
use crate::manifest::Manifest;
use crate::pipeline;
use crate::{debug, log};

/// Run the full build: read the source tree, fingerprint and rewrite the
/// batch, then write the output tree and the manifest.
///
/// All-or-nothing: any pipeline error propagates before anything is written,
/// leaving the output directory untouched.
pub fn run(config: &FilerevConfig) -> Result<()> {
    let source = &config.build.source;
    let assets = scan_assets(source)
        .with_context(|| format!("failed to scan `{}`", source.display()))?;

    if assets.is_empty() {
        log!("build"; "no assets found in `{}`", source.display());
        return Ok(());
    }
    debug!("build"; "scanned {} assets from `{}`", assets.len(), source.display());

    let options = config.run_options()?;
    let total = assets.len();
    let assets = pipeline::run(assets, &options)?;

    write_assets(&assets, &config.build.output)?;

    let manifest = Manifest::from_batch(&assets);
    manifest.write(&config.manifest_path())?;

    log!("build"; "processed {} assets, fingerprinted {}", total, manifest.len());
    Ok(())
}
