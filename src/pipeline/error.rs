//! Pipeline error types.

use thiserror::Error;

/// Fatal pipeline errors.
///
/// Any of these invalidates the whole run: no partially rewritten batch is
/// ever emitted, and callers must discard anything produced so far.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PipelineError {
    /// The reference graph among fingerprint-eligible assets has a cycle.
    ///
    /// The trace lists the asset identities along the cycle in traversal
    /// order, starting and ending at the same asset.
    #[error("Circular reference detected:\n{}", trace.join("\n"))]
    CircularReference { trace: Vec<String> },

    /// An asset's content is not materialized in memory.
    #[error("Streams are not supported!")]
    StreamsNotSupported,
}
