//! Embedded-item migration: legacy list items → unified list items.

use crate::error::MigrateResult;
use homecart_model::{ListItem, UnifiedListItem};
use homecart_store::{DocumentStore, WriteOp};
use serde_json::Value;
use tracing::{info, warn};

/// Upper bound on one migration scan. The production collections are a few
/// hundred documents; hitting this bound means something is wrong.
const SCAN_LIMIT: usize = 10_000;

/// Per-parent and aggregate child counts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ItemStats {
    pub total: usize,
    pub migrated: usize,
    pub skipped: usize,
}

impl ItemStats {
    fn absorb(&mut self, other: ItemStats) {
        self.total += other.total;
        self.migrated += other.migrated;
        self.skipped += other.skipped;
    }
}

/// The outcome of migrating one parent's child sequence.
#[derive(Clone, Debug, PartialEq)]
pub struct MigratedItems {
    pub items: Vec<UnifiedListItem>,
    pub stats: ItemStats,
}

impl MigratedItems {
    /// True when at least one child changed and the parent must be written.
    pub fn needs_update(&self) -> bool {
        self.stats.migrated > 0
    }
}

/// What a full run did.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MigrationReport {
    pub lists: usize,
    pub updated: usize,
    pub unchanged: usize,
    pub failed: usize,
    pub items: ItemStats,
}

impl MigrationReport {
    /// True when every parent either migrated cleanly or needed nothing.
    pub fn is_clean(&self) -> bool {
        self.failed == 0
    }
}

/// Migrates one raw `items` array.
///
/// Children already in the unified shape pass through unchanged; legacy
/// children are converted. A child that parses as neither shape fails the
/// whole array — a parent is never written partially transformed.
pub fn migrate_items(raw_items: &[Value]) -> Result<MigratedItems, serde_json::Error> {
    let mut stats = ItemStats {
        total: raw_items.len(),
        ..ItemStats::default()
    };
    let mut items = Vec::with_capacity(raw_items.len());

    for raw in raw_items {
        let item: ListItem = serde_json::from_value(raw.clone())?;
        match item {
            ListItem::Unified(item) => {
                stats.skipped += 1;
                items.push(item);
            }
            ListItem::Legacy(item) => {
                stats.migrated += 1;
                items.push(item.into_unified());
            }
        }
    }

    Ok(MigratedItems { items, stats })
}

/// Walks a collection of parents with an embedded `items` array and migrates
/// every legacy child to the unified shape.
pub struct ItemMigrator<'a> {
    store: &'a dyn DocumentStore,
    collection: String,
}

impl<'a> ItemMigrator<'a> {
    pub fn new(store: &'a dyn DocumentStore, collection: impl Into<String>) -> Self {
        Self {
            store,
            collection: collection.into(),
        }
    }

    pub async fn run(&self) -> MigrateResult<MigrationReport> {
        let docs = self.store.list(&self.collection, SCAN_LIMIT).await?;
        let mut report = MigrationReport {
            lists: docs.len(),
            ..MigrationReport::default()
        };

        for doc in docs {
            let name = doc
                .data
                .get("name")
                .and_then(Value::as_str)
                .unwrap_or("(unnamed)")
                .to_string();
            let raw_items = doc
                .data
                .get("items")
                .and_then(Value::as_array)
                .cloned()
                .unwrap_or_default();

            let migrated = match migrate_items(&raw_items) {
                Ok(migrated) => migrated,
                Err(err) => {
                    warn!(list = %name, id = %doc.id, %err, "unclassifiable item, list left untouched");
                    report.failed += 1;
                    continue;
                }
            };

            report.items.absorb(migrated.stats);
            info!(
                list = %name,
                total = migrated.stats.total,
                migrated = migrated.stats.migrated,
                skipped = migrated.stats.skipped,
                "list scanned"
            );

            if !migrated.needs_update() {
                report.unchanged += 1;
                continue;
            }

            let mut fields = serde_json::Map::new();
            fields.insert("items".to_string(), serde_json::to_value(&migrated.items)?);
            self.store
                .commit(&[
                    WriteOp::update(&self.collection, &doc.id, fields)
                        .with_server_stamp("updated_date"),
                ])
                .await?;
            report.updated += 1;
        }

        info!(
            lists = report.lists,
            updated = report.updated,
            unchanged = report.unchanged,
            failed = report.failed,
            items_migrated = report.items.migrated,
            "item migration finished"
        );
        Ok(report)
    }
}
