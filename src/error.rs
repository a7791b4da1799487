//! Top-level error type for histogram runs.

use std::io;

use crate::config::ConfigError;

/// Errors that abort a histogram run.
///
/// Out-of-range tuples and malformed input lines are not errors: the former
/// are counted, the latter end the import early (see [`crate::import`]).
#[derive(Debug, thiserror::Error)]
pub enum HistogramError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("invalid JSON configuration: {0}")]
    Json(#[from] serde_json::Error),

    /// Every tuple read was out of range, or nothing was read at all.
    #[error("no input data received ({read} tuples read, {rejected} out of range), giving up")]
    NoInputData { read: u64, rejected: u64 },
}
