//! Pantry inventory documents (`inventory` collection).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One tracked item in a household's pantry/fridge/freezer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: String,
    pub name: String,
    pub category: String,
    pub quantity: u32,
    pub unit: String,
    pub location: String,
    pub min_quantity: u32,
    pub expiry_date: Option<DateTime<Utc>>,
    pub notes: Option<String>,
    pub household_id: String,
    pub added_by: String,
    pub added_date: DateTime<Utc>,
    pub updated_date: DateTime<Utc>,
}
