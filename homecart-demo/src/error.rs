//! Demo-data error types.

use thiserror::Error;

pub type DemoResult<T> = Result<T, DemoError>;

#[derive(Debug, Error)]
pub enum DemoError {
    #[error("store error: {0}")]
    Store(#[from] homecart_store::StoreError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("the products collection is empty — run `upload-products` first")]
    EmptyCatalog,
}
