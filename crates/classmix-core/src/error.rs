//! Error types for the JSON bridge.

use thiserror::Error;

/// Errors produced by classmix entry points.
///
/// [`crate::join`] itself is total and never fails; only the JSON bridge can
/// reject its input.
#[derive(Error, Debug)]
pub enum ClassError {
    /// The argument list was not valid JSON.
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),
}

/// Convenience alias used throughout classmix-core.
pub type Result<T> = std::result::Result<T, ClassError>;
