//! Error types for respan.

use thiserror::Error;

/// Result type for respan operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for respan operations.
///
/// Structural errors abort a whole extraction call. Per-annotation mapping
/// failures are not errors: an annotation whose offsets have no original-text
/// counterpart is dropped from the result instead (see
/// [`extract`](crate::extract)).
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Requested named annotation collection does not exist on the document.
    #[error("Annotation collection not found: {0}")]
    CollectionNotFound(String),

    /// Document exposes no content string to slice from.
    #[error("Document has no content: {0}")]
    MissingContent(String),

    /// Two annotations within one document share an ID.
    ///
    /// Annotation IDs are assigned by the producer and must be unique across
    /// the default and all named collections of a document.
    #[error("Duplicate annotation ID {id} (type {annotation_type})")]
    DuplicateId {
        /// The repeated ID.
        id: u32,
        /// Type of the annotation found carrying the already-seen ID.
        annotation_type: String,
    },

    /// Invalid input provided.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl Error {
    /// Create a collection-not-found error.
    pub fn collection_not_found(name: impl Into<String>) -> Self {
        Error::CollectionNotFound(name.into())
    }

    /// Create a missing-content error.
    pub fn missing_content(msg: impl Into<String>) -> Self {
        Error::MissingContent(msg.into())
    }

    /// Create an invalid input error.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Error::InvalidInput(msg.into())
    }
}
