//! Error types for parameter ingestion and scene hashing.

use thiserror::Error;

/// Errors produced while ingesting untrusted parameters or hashing scenes.
///
/// Scene generation itself is total and has no error states; this type only
/// covers the JSON seam in front of it.
#[derive(Debug, Error)]
pub enum SpecError {
    /// JSON serialization or deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A canvas dimension is not a finite, positive number.
    #[error("{axis} must be finite and positive, got {value}")]
    InvalidDimension {
        /// Which dimension failed (`"width"` or `"height"`).
        axis: &'static str,
        /// The offending value.
        value: f64,
    },

    /// The base streak count is zero.
    #[error("count must be non-zero")]
    ZeroCount,
}
