//! Reference scanning (stage two).
//!
//! Tests every replace buffer against every fingerprint pattern. A matching
//! buffer is recorded once on the fingerprint entry regardless of how many
//! times the pattern occurs: ordering cares about edge existence only, and
//! multiplicity is handled at substitution time.

use super::RunContext;

pub(super) fn scan(ctx: &mut RunContext) {
    let RunContext {
        fingerprint,
        replace,
    } = ctx;

    for entry in fingerprint.values_mut() {
        for (referrer, buffer) in replace.iter() {
            if entry.pattern.is_match(&buffer.contents) {
                entry.references.push(referrer.to_string());
            }
        }
    }
}
