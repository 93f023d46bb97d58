//! Fingerprint index construction (stage one).
//!
//! Scans the whole batch once, creating a fingerprint entry for every asset
//! matched by the filerev pattern set and a replace buffer for every asset
//! matched by the replace pattern set that sniffs as text. The batch itself
//! passes through unmodified.

use crate::asset::{Asset, ContentKind};

use super::{
    FingerprintEntry, PipelineError, ReferencePattern, ReplaceEntry, RunContext, RunOptions,
};

pub(super) fn build(
    assets: &[Asset],
    options: &RunOptions,
    ctx: &mut RunContext,
) -> Result<(), PipelineError> {
    for asset in assets {
        let Some(contents) = asset.contents() else {
            return Err(PipelineError::StreamsNotSupported);
        };

        let relative = asset.relative();
        let id = asset.relative_id();

        if options.filerev.is_match(&relative) {
            let pattern = ReferencePattern::new(&asset.served_path(options.base.as_deref()));
            ctx.fingerprint.insert(
                id.clone(),
                FingerprintEntry {
                    pattern,
                    references: Vec::new(),
                },
            );
        }

        if options.replace.is_match(&relative) && ContentKind::sniff(contents).is_text() {
            ctx.replace.insert(
                id,
                ReplaceEntry {
                    contents: String::from_utf8_lossy(contents).into_owned(),
                },
            );
        }
    }
    Ok(())
}
