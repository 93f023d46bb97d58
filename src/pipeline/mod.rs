//! The fingerprint-and-rewrite pipeline.
//!
//! Four stages run in strict order over the full in-memory batch:
//!
//! 1. [`index`] - build the fingerprint and replace indices
//! 2. [`references`] - record which assets reference which
//! 3. [`depth`] - depth-sort the batch, rejecting cyclic reference graphs
//! 4. [`rewrite`] - hash, rename, and splice new paths into referencing buffers
//!
//! The engine is batch-oriented: no asset is finalized until the whole batch
//! has been scanned, because a later asset may still add references to an
//! earlier one. All per-run state lives in [`RunContext`], constructed at run
//! start and discarded when the run completes; nothing persists across runs.

mod depth;
mod error;
mod index;
mod pattern;
mod references;
mod rewrite;


pub use error::PipelineError;
pub use pattern::ReferencePattern;

use std::path::PathBuf;

use globset::GlobSet;
use rustc_hash::FxHashMap;

use crate::asset::Asset;

/// Per-run pattern sets and served-path base override.
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Assets eligible for fingerprint renaming.
    pub filerev: GlobSet,
    /// Assets eligible for content rewriting.
    pub replace: GlobSet,
    /// Base used instead of each asset's own base when computing served paths.
    pub base: Option<PathBuf>,
}

/// One fingerprint-eligible asset: its match pattern and the identities of
/// the assets referencing it, in scan order.
struct FingerprintEntry {
    pattern: ReferencePattern,
    references: Vec<String>,
}

/// One replace-eligible text asset: its full content as a mutable buffer.
///
/// Supersedes the asset's original content once the run finishes.
struct ReplaceEntry {
    contents: String,
}

/// State owned by a single pipeline run.
#[derive(Default)]
struct RunContext {
    fingerprint: OrderedIndex<FingerprintEntry>,
    replace: OrderedIndex<ReplaceEntry>,
}

/// Insertion-ordered map keyed by asset identity (relative path).
///
/// Iteration order is observable (reference lists accumulate in scan order),
/// so a plain hash map is not enough.
struct OrderedIndex<T> {
    entries: Vec<(String, T)>,
    by_id: FxHashMap<String, usize>,
}

impl<T> Default for OrderedIndex<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            by_id: FxHashMap::default(),
        }
    }
}

impl<T> OrderedIndex<T> {
    fn insert(&mut self, id: String, value: T) {
        if let Some(&slot) = self.by_id.get(&id) {
            self.entries[slot].1 = value;
        } else {
            self.by_id.insert(id.clone(), self.entries.len());
            self.entries.push((id, value));
        }
    }

    fn get(&self, id: &str) -> Option<&T> {
        self.by_id.get(id).map(|&slot| &self.entries[slot].1)
    }

    fn get_mut(&mut self, id: &str) -> Option<&mut T> {
        self.by_id
            .get(id)
            .copied()
            .map(|slot| &mut self.entries[slot].1)
    }

    fn contains(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    fn iter(&self) -> impl Iterator<Item = (&str, &T)> {
        self.entries.iter().map(|(id, value)| (id.as_str(), value))
    }

    fn values_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.entries.iter_mut().map(|(_, value)| value)
    }
}

/// Run the full pipeline over `assets`.
///
/// Returns the batch with final paths and contents, deepest-referenced
/// assets first. Any error invalidates the whole run; no partially rewritten
/// batch is ever returned.
pub fn run(assets: Vec<Asset>, options: &RunOptions) -> Result<Vec<Asset>, PipelineError> {
    let mut ctx = RunContext::default();
    index::build(&assets, options, &mut ctx)?;
    references::scan(&mut ctx);
    let assets = depth::sort(assets, &ctx)?;
    rewrite::apply(assets, options, &mut ctx)
}
