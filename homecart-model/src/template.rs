//! List templates (`templates` collection).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A starter-list template. System templates are shared across all
/// households (`is_system = true`, `household_id = None`,
/// `created_by = "system"`); personal templates belong to one household.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Template {
    pub id: String,
    #[serde(rename = "type")]
    pub template_type: String,
    pub name: String,
    pub description: String,
    pub icon: String,
    pub default_format: String,
    pub default_items: Vec<TemplateItem>,
    pub is_system: bool,
    pub created_by: String,
    pub household_id: Option<String>,
    pub created_date: DateTime<Utc>,
    pub updated_date: DateTime<Utc>,
    pub sort_order: u32,
}

/// One suggested item inside a template. Quantities are fractional because
/// weight-based items ("1.5 kg") appear in the seeded data.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TemplateItem {
    pub name: String,
    pub category: String,
    pub quantity: f64,
    pub unit: String,
}
