//! Error type for loading feature data.

use std::path::PathBuf;

/// Error type for source loading operations.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("Source file not found at: {0}")]
    NotFound(PathBuf),
    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Expected a FeatureCollection document, found {0}")]
    NotAFeatureCollection(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
