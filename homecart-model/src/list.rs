//! Shopping lists and the two list-item generations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A shopping list document (`shopping_lists` collection).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ShoppingList {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub list_type: String,
    pub status: ListStatus,
    pub household_id: String,
    pub created_by: String,
    pub created_date: DateTime<Utc>,
    pub updated_date: DateTime<Utc>,
    pub items: Vec<ListItem>,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListStatus {
    Active,
    Completed,
}

/// Status of a legacy (pre-migration) list item.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemStatus {
    Pending,
    Taken,
    Purchased,
}

/// Discriminator of a unified list item.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemType {
    Product,
    Task,
}

/// One entry of a list's `items` array.
///
/// Lists migrated to the unified shape carry a `type` field on every item;
/// items without it are the legacy shape. Deserialization tries the unified
/// arm first, so the `type` field is the effective discriminator. An entry
/// that matches neither arm is malformed and fails the whole list's parse.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ListItem {
    Unified(UnifiedListItem),
    Legacy(LegacyListItem),
}

impl ListItem {
    pub fn is_unified(&self) -> bool {
        matches!(self, ListItem::Unified(_))
    }

    pub fn name(&self) -> &str {
        match self {
            ListItem::Unified(item) => &item.name,
            ListItem::Legacy(item) => &item.name,
        }
    }
}

// ── Unified items ───────────────────────────────────────────────────────

/// Product-specific fields of a unified item.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductData {
    pub quantity: f64,
    pub unit_price: f64,
    pub barcode: Option<String>,
    pub unit: String,
}

/// Task-specific fields of a unified item.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskData {
    #[serde(default)]
    pub due_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub assigned_to: Option<String>,
}

/// The per-type payload of a unified item. Exactly one of the wire fields
/// `productData`/`taskData` is non-null, matching the `type` discriminator;
/// modeling the pair as a sum makes that unrepresentable as anything else.
#[derive(Clone, Debug, PartialEq)]
pub enum ItemPayload {
    Product(ProductData),
    Task(TaskData),
}

impl ItemPayload {
    pub fn item_type(&self) -> ItemType {
        match self {
            ItemPayload::Product(_) => ItemType::Product,
            ItemPayload::Task(_) => ItemType::Task,
        }
    }
}

/// A migrated list item: products and plain tasks under one discriminated
/// shape. Wire fields are camelCase (`isChecked`, `productData`, `taskData`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "UnifiedItemWire", into = "UnifiedItemWire")]
pub struct UnifiedListItem {
    pub id: String,
    pub name: String,
    pub is_checked: bool,
    pub category: Option<String>,
    pub notes: Option<String>,
    pub payload: ItemPayload,
}

impl UnifiedListItem {
    pub fn item_type(&self) -> ItemType {
        self.payload.item_type()
    }

    pub fn product_data(&self) -> Option<&ProductData> {
        match &self.payload {
            ItemPayload::Product(data) => Some(data),
            ItemPayload::Task(_) => None,
        }
    }

    pub fn task_data(&self) -> Option<&TaskData> {
        match &self.payload {
            ItemPayload::Task(data) => Some(data),
            ItemPayload::Product(_) => None,
        }
    }
}

/// The raw wire shape of a unified item, before the exactly-one-payload
/// check. Serde round-trips `UnifiedListItem` through this struct.
#[derive(Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UnifiedItemWire {
    #[serde(default)]
    id: String,
    name: String,
    #[serde(rename = "type")]
    item_type: ItemType,
    #[serde(default)]
    is_checked: bool,
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    notes: Option<String>,
    product_data: Option<ProductData>,
    task_data: Option<TaskData>,
}

impl TryFrom<UnifiedItemWire> for UnifiedListItem {
    type Error = String;

    fn try_from(wire: UnifiedItemWire) -> Result<Self, Self::Error> {
        let payload = match (wire.item_type, wire.product_data, wire.task_data) {
            (ItemType::Product, Some(product), None) => ItemPayload::Product(product),
            (ItemType::Task, None, Some(task)) => ItemPayload::Task(task),
            (item_type, product, task) => {
                return Err(format!(
                    "item `{}`: type {:?} does not match payload (productData: {}, taskData: {})",
                    wire.name,
                    item_type,
                    if product.is_some() { "set" } else { "null" },
                    if task.is_some() { "set" } else { "null" },
                ));
            }
        };

        Ok(UnifiedListItem {
            id: wire.id,
            name: wire.name,
            is_checked: wire.is_checked,
            category: wire.category,
            notes: wire.notes,
            payload,
        })
    }
}

impl From<UnifiedListItem> for UnifiedItemWire {
    fn from(item: UnifiedListItem) -> Self {
        let (item_type, product_data, task_data) = match item.payload {
            ItemPayload::Product(data) => (ItemType::Product, Some(data), None),
            ItemPayload::Task(data) => (ItemType::Task, None, Some(data)),
        };
        UnifiedItemWire {
            id: item.id,
            name: item.name,
            item_type,
            is_checked: item.is_checked,
            category: item.category,
            notes: item.notes,
            product_data,
            task_data,
        }
    }
}

// ── Legacy items ────────────────────────────────────────────────────────

/// A pre-migration list item. Old documents are uneven, so only the fields
/// the app always wrote (`name`, `status`) are required; everything else
/// falls back to the defaults the app itself used.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LegacyListItem {
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default = "default_quantity")]
    pub quantity: f64,
    #[serde(default = "default_unit")]
    pub unit: String,
    pub status: ItemStatus,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub barcode: Option<String>,
    #[serde(default)]
    pub added_by: Option<String>,
    #[serde(default)]
    pub added_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_date: Option<DateTime<Utc>>,
}

fn default_quantity() -> f64 {
    1.0
}

fn default_unit() -> String {
    "יח׳".to_string()
}

impl LegacyListItem {
    /// Converts to the unified shape. Taken and purchased items both map to
    /// a checked unified item; the price becomes the product unit price.
    pub fn into_unified(self) -> UnifiedListItem {
        UnifiedListItem {
            id: self.id,
            name: self.name,
            is_checked: matches!(self.status, ItemStatus::Taken | ItemStatus::Purchased),
            category: self.category,
            notes: self.notes,
            payload: ItemPayload::Product(ProductData {
                quantity: self.quantity,
                unit_price: self.price,
                barcode: self.barcode,
                unit: self.unit,
            }),
        }
    }
}
