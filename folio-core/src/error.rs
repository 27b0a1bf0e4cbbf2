//! Error types for Folio Core

use thiserror::Error;

/// Result type alias using FolioError
pub type Result<T> = std::result::Result<T, FolioError>;

/// Top-level error type for all Folio operations.
///
/// Navigation itself has no failure modes; every boundary condition is a
/// silent clamp or no-op. Errors only arise at the content-source boundary.
#[derive(Debug, Error)]
pub enum FolioError {
    #[error("Extract error: {0}")]
    Extract(#[from] ExtractError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that occur while extracting pages from a source document
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Invalid container selector: {0}")]
    InvalidSelector(String),
}
