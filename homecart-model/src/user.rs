//! User profile documents (`users` collection).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A user profile document. The document id equals the auth provider's uid;
/// the app creates the document on first login and the seeding commands
/// create it ahead of time for demo accounts.
///
/// The canonical casing is snake_case throughout. Early revisions of the app
/// wrote camelCase duplicates (`householdId`, `lastLoginAt`, `createdAt`,
/// `avatar`); `repair-demo-users` deletes those.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserDoc {
    pub id: String,
    pub name: String,
    pub email: String,
    pub household_id: String,
    pub joined_at: DateTime<Utc>,
    pub last_login_at: DateTime<Utc>,
    #[serde(default)]
    pub preferred_stores: Vec<String>,
    #[serde(default)]
    pub favorite_products: Vec<String>,
    #[serde(default)]
    pub weekly_budget: f64,
    #[serde(default)]
    pub is_admin: bool,
    pub profile_image_url: Option<String>,
}

/// The stray camelCase fields older app builds left on user documents.
pub const LEGACY_USER_FIELDS: &[&str] = &["householdId", "lastLoginAt", "createdAt", "avatar"];
