//! Scanned/synthesized receipts (`receipts` collection).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A store receipt. `total` is the sum of the line totals, rounded to two
/// decimals.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Receipt {
    pub id: String,
    pub store_name: String,
    pub date: DateTime<Utc>,
    pub total: f64,
    pub items: Vec<ReceiptItem>,
    pub image_path: Option<String>,
    pub household_id: String,
    pub uploaded_by: String,
    pub created_date: DateTime<Utc>,
}

/// One line on a receipt.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReceiptItem {
    pub name: String,
    pub price: f64,
    pub quantity: u32,
    pub total: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub barcode: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}
