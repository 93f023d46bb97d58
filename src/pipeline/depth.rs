//! Depth computation and batch ordering (stage three).
//!
//! An asset referenced through a longer chain of fingerprint-eligible assets
//! must be renamed before the assets referencing it, so their rewrite step
//! sees the final name. Depth is the length of the longest such chain ending
//! at the asset; the batch is stable-sorted by decreasing depth.

use std::cmp::Reverse;

use rustc_hash::FxHashMap;

use crate::asset::Asset;

use super::{PipelineError, RunContext};

/// Stable-sort the batch so deeper fingerprint-eligible assets come first.
///
/// Assets without a fingerprint entry keep depth 0 and their relative order;
/// ties among equal depths keep batch order.
pub(super) fn sort(
    mut assets: Vec<Asset>,
    ctx: &RunContext,
) -> Result<Vec<Asset>, PipelineError> {
    let mut depths: FxHashMap<String, usize> = FxHashMap::default();

    for asset in &assets {
        let id = asset.relative_id();
        if let Some(entry) = ctx.fingerprint.get(&id) {
            let depth = max_depth(ctx, &mut vec![id.clone()], &entry.references)?;
            depths.insert(id, depth);
        }
    }

    assets.sort_by_cached_key(|asset| {
        Reverse(depths.get(&asset.relative_id()).copied().unwrap_or(0))
    });
    Ok(assets)
}

/// Longest chain of fingerprint-eligible referencers above the current path.
///
/// `stack` is the ordered traversal path; revisiting an identity already on
/// it means the reference graph is cyclic. A referencer with no references
/// of its own, or one outside the fingerprint set, contributes the current
/// path length (a leaf asset has depth 1, its own frame).
fn max_depth(
    ctx: &RunContext,
    stack: &mut Vec<String>,
    references: &[String],
) -> Result<usize, PipelineError> {
    if references.is_empty() {
        return Ok(stack.len());
    }

    let mut deepest = 0;
    for id in references {
        let depth = match ctx.fingerprint.get(id) {
            // Not fingerprint-eligible: a sink, does not extend the chain
            None => stack.len(),
            Some(entry) => {
                if stack.contains(id) {
                    let mut trace = stack.clone();
                    trace.push(id.clone());
                    return Err(PipelineError::CircularReference { trace });
                }
                stack.push(id.clone());
                let depth = max_depth(ctx, stack, &entry.references)?;
                stack.pop();
                depth
            }
        };
        deepest = deepest.max(depth);
    }
    Ok(deepest)
}
