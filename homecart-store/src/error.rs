//! Error types shared by both seams.

use thiserror::Error;

/// Result type for store and directory operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors crossing the document-store and auth-directory seams.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("document not found: {0}")]
    NotFound(String),

    /// Distinguished from other directory failures so callers can fall back
    /// to creating the account.
    #[error("no user account for email: {0}")]
    UserNotFound(String),

    #[error("an account already exists for email: {0}")]
    DuplicateEmail(String),

    #[error("batch of {size} operations exceeds the commit cap of {max}")]
    BatchTooLarge { size: usize, max: usize },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("backend error: {0}")]
    Backend(String),
}
