//! Typed write operations against the document store.

use crate::error::{StoreError, StoreResult};
use serde_json::{Map, Value};

/// The document store commits at most this many operations atomically.
pub const MAX_BATCH_OPS: usize = 500;

/// One mutation of one document.
#[derive(Clone, Debug, PartialEq)]
pub struct WriteOp {
    pub collection: String,
    pub doc_id: String,
    pub kind: WriteKind,
}

/// What the mutation does. Server-stamped fields (`stamps`) receive the
/// backend's commit timestamp, distinct from any client-supplied value.
#[derive(Clone, Debug, PartialEq)]
pub enum WriteKind {
    /// Write the document body. With `merge`, only the given top-level
    /// fields are replaced; without it the whole document is overwritten.
    Set {
        data: Value,
        merge: bool,
        stamps: Vec<String>,
    },
    /// Update named top-level fields on an existing document; `deletes`
    /// removes fields via the field-deletion sentinel.
    Update {
        fields: Map<String, Value>,
        stamps: Vec<String>,
        deletes: Vec<String>,
    },
    /// Remove the document. Deleting a missing document is not an error.
    Delete,
}

impl WriteOp {
    pub fn set(collection: impl Into<String>, doc_id: impl Into<String>, data: Value) -> Self {
        Self {
            collection: collection.into(),
            doc_id: doc_id.into(),
            kind: WriteKind::Set {
                data,
                merge: false,
                stamps: Vec::new(),
            },
        }
    }

    pub fn set_merged(
        collection: impl Into<String>,
        doc_id: impl Into<String>,
        data: Value,
    ) -> Self {
        Self {
            collection: collection.into(),
            doc_id: doc_id.into(),
            kind: WriteKind::Set {
                data,
                merge: true,
                stamps: Vec::new(),
            },
        }
    }

    pub fn update(
        collection: impl Into<String>,
        doc_id: impl Into<String>,
        fields: Map<String, Value>,
    ) -> Self {
        Self {
            collection: collection.into(),
            doc_id: doc_id.into(),
            kind: WriteKind::Update {
                fields,
                stamps: Vec::new(),
                deletes: Vec::new(),
            },
        }
    }

    pub fn delete(collection: impl Into<String>, doc_id: impl Into<String>) -> Self {
        Self {
            collection: collection.into(),
            doc_id: doc_id.into(),
            kind: WriteKind::Delete,
        }
    }

    /// Adds a field path stamped with the server's commit time.
    pub fn with_server_stamp(mut self, field: impl Into<String>) -> Self {
        match &mut self.kind {
            WriteKind::Set { stamps, .. } | WriteKind::Update { stamps, .. } => {
                stamps.push(field.into());
            }
            WriteKind::Delete => {}
        }
        self
    }

    /// Adds a field path removed via the deletion sentinel (updates only).
    pub fn with_field_delete(mut self, field: impl Into<String>) -> Self {
        if let WriteKind::Update { deletes, .. } = &mut self.kind {
            deletes.push(field.into());
        }
        self
    }
}

/// Rejects batches over the atomic commit cap before they reach the wire.
pub fn ensure_batch_size(writes: &[WriteOp]) -> StoreResult<()> {
    if writes.len() > MAX_BATCH_OPS {
        return Err(StoreError::BatchTooLarge {
            size: writes.len(),
            max: MAX_BATCH_OPS,
        });
    }
    Ok(())
}
