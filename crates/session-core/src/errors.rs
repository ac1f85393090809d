//! Error types for the core crate

use std::path::PathBuf;
use thiserror::Error;

/// Core errors
///
/// The translator itself is total; these only surface at the edges where
/// payloads, config files and page requests come in.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid payload: expected {expected}, got {actual}")]
    InvalidPayload { expected: String, actual: String },

    #[error("Invalid page request: size {size}, page {page} (both must be at least 1)")]
    InvalidPage { size: usize, page: usize },

    #[error("Invalid config at {path}: {message}")]
    Config { path: PathBuf, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
