//! The document-store seam.

use crate::error::StoreResult;
use crate::write::WriteOp;
use async_trait::async_trait;
use serde_json::Value;

/// A document read back from the store.
#[derive(Clone, Debug, PartialEq)]
pub struct Doc {
    pub id: String,
    pub data: Value,
}

impl Doc {
    /// Deserializes the document body into a typed shape.
    pub fn parse<T: serde::de::DeserializeOwned>(&self) -> serde_json::Result<T> {
        serde_json::from_value(self.data.clone())
    }
}

/// Read and write access to a document database.
///
/// Implementations commit a whole `writes` slice atomically (up to
/// [`crate::MAX_BATCH_OPS`] operations); callers with more operations go
/// through [`crate::BatchWriter`], which chunks and commits sequentially.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Fetches a single document, `None` when it does not exist.
    async fn get(&self, collection: &str, doc_id: &str) -> StoreResult<Option<Doc>>;

    /// All documents whose top-level `field` equals `value`.
    async fn query_eq(&self, collection: &str, field: &str, value: &Value)
        -> StoreResult<Vec<Doc>>;

    /// Up to `limit` documents of a collection, in id order.
    async fn list(&self, collection: &str, limit: usize) -> StoreResult<Vec<Doc>>;

    /// Commits one batch of writes atomically.
    async fn commit(&self, writes: &[WriteOp]) -> StoreResult<()>;
}
