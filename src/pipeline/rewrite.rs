//! Fingerprint renaming and reference rewriting (stage four).
//!
//! Walks the depth-sorted batch. Deeper assets are finalized first, so by
//! the time an asset is hashed its buffer already carries the final names of
//! everything it references. Emission order is the depth-sort order; the
//! batch is not re-sorted.

use crate::asset::Asset;
use crate::log;
use crate::utils::{hash, path};

use super::{PipelineError, RunContext, RunOptions};

pub(super) fn apply(
    mut assets: Vec<Asset>,
    options: &RunOptions,
    ctx: &mut RunContext,
) -> Result<Vec<Asset>, PipelineError> {
    let RunContext {
        fingerprint,
        replace,
    } = ctx;

    for asset in &mut assets {
        let id = asset.relative_id();

        // Load the (possibly rewritten) buffer back into the asset before
        // hashing, so the fingerprint covers the final content.
        if let Some(entry) = replace.get(&id) {
            asset.set_contents(entry.contents.clone().into_bytes());
        }

        let Some(entry) = fingerprint.get(&id) else {
            continue;
        };

        let Some(contents) = asset.contents() else {
            return Err(PipelineError::StreamsNotSupported);
        };
        let digest = hash::fingerprint(contents);
        asset.rename_to(path::with_fingerprint(&asset.relative(), &digest));

        log!("filerev"; "Filerevved: {} -> {}", id, asset.relative_id());

        let dest = asset.served_path(options.base.as_deref());
        for reference in &entry.references {
            let Some(buffer) = replace.get_mut(reference) else {
                continue;
            };
            let (rewritten, count) = entry.pattern.replace_all(&buffer.contents, &dest);
            buffer.contents = rewritten;

            log!("replace"; "Replaced: {} ({}x)", reference, count);
        }
    }

    Ok(assets)
}
