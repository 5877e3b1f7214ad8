//! Error types for the structure-to-HTML library.
//!
//! This module defines all error types that can occur while opening a tagged
//! document and converting its structure tree. Traversal itself never fails:
//! every error is detected before the first node is visited.

use std::path::PathBuf;

/// Result type alias for library operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during document loading and conversion.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error while reading the input document
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The structure dump could not be decoded
    #[error("Corrupt document: {0}")]
    Json(#[from] serde_json::Error),

    /// The document decoded but is structurally invalid
    #[error("Invalid document: {0}")]
    InvalidDocument(String),

    /// None of the supplied credentials opened the document
    #[error("Incorrect password")]
    WrongPassword,

    /// The document is valid but carries no logical structure tree
    #[error("Document is not tagged: no structure tree")]
    NoStructureTree,

    /// The output destination could not be created or written
    #[error("Cannot write output {}: {source}", path.display())]
    OutputUnavailable {
        /// Destination path
        path: PathBuf,
        /// Underlying IO failure
        source: std::io::Error,
    },
}

impl Error {
    /// Whether this error means the input document failed to open.
    ///
    /// `NoStructureTree` and `OutputUnavailable` are reported separately:
    /// the first is an expected condition for untagged documents, the second
    /// concerns the destination rather than the input.
    pub fn is_open_failure(&self) -> bool {
        matches!(
            self,
            Error::Io(_) | Error::Json(_) | Error::InvalidDocument(_) | Error::WrongPassword
        )
    }
}
