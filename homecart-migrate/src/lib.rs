//! Idempotent document migrations for the Homecart collections.
//!
//! Two migration shapes cover every schema change the app has shipped:
//!
//! - [`ItemMigrator`] — parents with an embedded child sequence
//!   (list → items): classify each child, transform only the unmigrated
//!   ones, write the parent back once if anything changed.
//! - [`FieldValueMigration`] — a scalar field rename across all documents
//!   matching the old value, committed in batches.
//!
//! Both are safe to re-run: the item transform always produces the
//! already-migrated shape, and the field migration's equality query matches
//! nothing once every document carries the new value.

mod error;
mod field_value;
mod items;

pub use error::{MigrateError, MigrateResult};
pub use field_value::{FieldMigrationReport, FieldValueMigration};
pub use items::{migrate_items, ItemMigrator, ItemStats, MigratedItems, MigrationReport};
