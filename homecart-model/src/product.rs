//! Reference catalog products.

use serde::{Deserialize, Serialize};

/// A product in the read-only reference catalog (`products` collection).
///
/// Documents are keyed by barcode. Catalog rows imported from retailer feeds
/// are uneven, so everything except the name is defaulted on read.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(default)]
    pub barcode: String,
    pub name: String,
    #[serde(default = "default_category")]
    pub category: String,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default = "default_unit")]
    pub unit: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store: Option<String>,
}

fn default_category() -> String {
    "כללי".to_string()
}

fn default_unit() -> String {
    "יח׳".to_string()
}

impl Product {
    /// Usable for demo sampling: named and priced.
    pub fn is_sellable(&self) -> bool {
        !self.name.trim().is_empty() && self.price > 0.0
    }
}
