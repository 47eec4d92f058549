//! Document shapes for the Homecart Firestore collections.
//!
//! These are the shapes the admin commands read and write. The surrounding
//! mobile app owns the schema; this crate only models the fields the admin
//! tooling touches, with serde derives matching the wire casing exactly:
//! snake_case for top-level documents, camelCase inside the unified list
//! item (`isChecked`, `productData`, `taskData`).
//!
//! Legacy and migrated list items coexist in the same `items` array, so the
//! item type is a sum (`ListItem::Legacy | ListItem::Unified`) discriminated
//! by the presence of the `type` field.

mod inventory;
mod list;
mod product;
mod receipt;
mod template;
mod user;

pub use inventory::InventoryItem;
pub use list::{
    ItemPayload, ItemStatus, ItemType, LegacyListItem, ListItem, ListStatus, ProductData,
    ShoppingList, TaskData, UnifiedListItem,
};
pub use product::Product;
pub use receipt::{Receipt, ReceiptItem};
pub use template::{Template, TemplateItem};
pub use user::{UserDoc, LEGACY_USER_FIELDS};

/// Collection names as they exist in the production database.
pub mod collections {
    pub const TEMPLATES: &str = "templates";
    pub const USERS: &str = "users";
    pub const SHOPPING_LISTS: &str = "shopping_lists";
    pub const INVENTORY: &str = "inventory";
    pub const RECEIPTS: &str = "receipts";
    pub const PRODUCTS: &str = "products";
}
