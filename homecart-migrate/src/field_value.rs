//! Scalar field-value migration across a collection.

use crate::error::MigrateResult;
use homecart_store::{BatchWriter, DocumentStore, WriteOp};
use serde_json::Value;
use tracing::info;

/// Rewrites every document whose `field` equals `from` to carry `to`
/// instead, stamping the document's modification time. Documents already on
/// the new value never match the query, so re-running is a no-op.
pub struct FieldValueMigration<'a> {
    store: &'a dyn DocumentStore,
    collection: String,
    field: String,
    from: Value,
    to: Value,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FieldMigrationReport {
    pub matched: usize,
    pub updated: usize,
    pub chunks: usize,
}

impl<'a> FieldValueMigration<'a> {
    pub fn new(
        store: &'a dyn DocumentStore,
        collection: impl Into<String>,
        field: impl Into<String>,
        from: Value,
        to: Value,
    ) -> Self {
        Self {
            store,
            collection: collection.into(),
            field: field.into(),
            from,
            to,
        }
    }

    pub async fn run(&self) -> MigrateResult<FieldMigrationReport> {
        let docs = self
            .store
            .query_eq(&self.collection, &self.field, &self.from)
            .await?;
        let matched = docs.len();
        info!(collection = %self.collection, field = %self.field, matched, "field migration scan");

        let writes: Vec<WriteOp> = docs
            .into_iter()
            .map(|doc| {
                let mut fields = serde_json::Map::new();
                fields.insert(self.field.clone(), self.to.clone());
                WriteOp::update(&self.collection, &doc.id, fields)
                    .with_server_stamp("updated_date")
            })
            .collect();

        let report = BatchWriter::new(self.store).write_all(writes).await?;
        Ok(FieldMigrationReport {
            matched,
            updated: report.written,
            chunks: report.chunks,
        })
    }
}
