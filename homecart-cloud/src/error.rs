//! Cloud client error types.

use homecart_store::StoreError;
use thiserror::Error;

/// Result type for cloud client operations.
pub type CloudResult<T> = Result<T, CloudError>;

/// Errors from the REST clients.
#[derive(Debug, Error)]
pub enum CloudError {
    #[error("API request failed: {0}")]
    Api(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("credential error: {0}")]
    Credentials(String),

    #[error("no user account for email: {0}")]
    UserNotFound(String),

    #[error("an account already exists for email: {0}")]
    DuplicateEmail(String),

    #[error("unsupported document value: {0}")]
    Value(String),

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl From<CloudError> for StoreError {
    fn from(err: CloudError) -> Self {
        match err {
            CloudError::UserNotFound(email) => StoreError::UserNotFound(email),
            CloudError::DuplicateEmail(email) => StoreError::DuplicateEmail(email),
            other => StoreError::Backend(other.to_string()),
        }
    }
}
