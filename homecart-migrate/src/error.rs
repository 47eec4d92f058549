//! Migration error types.

use thiserror::Error;

pub type MigrateResult<T> = Result<T, MigrateError>;

/// Errors that abort a migration run. Per-parent classification failures do
/// not surface here — they are counted in the run's report instead.
#[derive(Debug, Error)]
pub enum MigrateError {
    #[error("store error: {0}")]
    Store(#[from] homecart_store::StoreError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
