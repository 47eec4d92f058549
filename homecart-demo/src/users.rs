//! Demo account rosters and user provisioning.
//!
//! Provisioning is get-or-create: the auth directory is checked by email,
//! the account is created only on the distinguished not-found error, and
//! the Firestore profile document is overwritten either way (keyed by uid,
//! so re-running converges). Failures on one user never stop the loop —
//! they are logged and counted.

use crate::error::DemoResult;
use chrono::{DateTime, Utc};
use homecart_model::{collections, UserDoc, LEGACY_USER_FIELDS};
use homecart_store::{
    AuthDirectory, AuthUser, AuthUserUpdate, DocumentStore, NewAuthUser, StoreError, StoreResult,
    WriteOp,
};
use tracing::{info, warn};

/// Role inside the demo family.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FamilyRole {
    Father,
    Mother,
    Son,
    Daughter,
}

impl FamilyRole {
    /// Parents administer the household budget.
    pub fn is_admin(self) -> bool {
        matches!(self, FamilyRole::Father | FamilyRole::Mother)
    }

    pub fn label(self) -> &'static str {
        match self {
            FamilyRole::Father => "אבא",
            FamilyRole::Mother => "אמא",
            FamilyRole::Son => "בן",
            FamilyRole::Daughter => "בת",
        }
    }
}

/// One row of a demo roster.
#[derive(Clone, Copy, Debug)]
pub struct DemoUser {
    pub email: &'static str,
    pub password: &'static str,
    pub name: &'static str,
    pub role: FamilyRole,
    pub weekly_budget: f64,
}

pub const DEMO_HOUSEHOLD_ID: &str = "house_demo";
pub const FAMILY_HOUSEHOLD_ID: &str = "house_levi_demo";

/// The three-person household used by the basic demo flows.
pub const DEMO_USERS: &[DemoUser] = &[
    DemoUser {
        email: "danny@demo.com",
        password: "Demo123!",
        name: "דני כהן",
        role: FamilyRole::Father,
        weekly_budget: 1500.0,
    },
    DemoUser {
        email: "sarah@demo.com",
        password: "Demo123!",
        name: "שרה כהן",
        role: FamilyRole::Mother,
        weekly_budget: 1500.0,
    },
    DemoUser {
        email: "yoni@demo.com",
        password: "Demo123!",
        name: "יוני כהן",
        role: FamilyRole::Son,
        weekly_budget: 0.0,
    },
];

pub const DEMO_STORES: &[&str] = &["שופרסל", "רמי לוי", "פארם"];

/// The five-person family the full demo environment is built around.
pub const DEMO_FAMILY: &[DemoUser] = &[
    DemoUser {
        email: "avi.levi@demo.com",
        password: "Demo2025!",
        name: "אבי לוי",
        role: FamilyRole::Father,
        weekly_budget: 2000.0,
    },
    DemoUser {
        email: "michal.levi@demo.com",
        password: "Demo2025!",
        name: "מיכל לוי",
        role: FamilyRole::Mother,
        weekly_budget: 2000.0,
    },
    DemoUser {
        email: "tomer.levi@demo.com",
        password: "Demo2025!",
        name: "תומר לוי",
        role: FamilyRole::Son,
        weekly_budget: 0.0,
    },
    DemoUser {
        email: "noam.levi@demo.com",
        password: "Demo2025!",
        name: "נועם לוי",
        role: FamilyRole::Son,
        weekly_budget: 0.0,
    },
    DemoUser {
        email: "talia.levi@demo.com",
        password: "Demo2025!",
        name: "טליה לוי",
        role: FamilyRole::Daughter,
        weekly_budget: 0.0,
    },
];

pub const FAMILY_STORES: &[&str] = &["שופרסל סיטי", "רמי לוי", "ויקטורי"];

/// Document ids an early seeding attempt created before accounts got real
/// uids. Provisioning and cleanup both delete them.
pub const LEGACY_PLACEHOLDER_IDS: &[&str] =
    &["danny_demo_user", "sarah_demo_user", "yoni_demo_user"];

/// The placeholder documents' identities, for the repair flow.
const PLACEHOLDER_USERS: &[(&str, &str, &str)] = &[
    ("danny_demo_user", "דני", "danny@demo.com"),
    ("sarah_demo_user", "שרה", "sarah@demo.com"),
    ("yoni_demo_user", "יוני", "yoni@demo.com"),
];

/// A user that provisioning ended up with, for the CLI's credentials
/// summary.
#[derive(Clone, Debug)]
pub struct ProvisionedUser {
    pub uid: String,
    pub email: String,
    pub name: String,
    pub password: String,
    pub role: FamilyRole,
    pub created: bool,
}

/// What one provisioning run did.
#[derive(Clone, Debug, Default)]
pub struct ProvisionReport {
    pub created: usize,
    pub existing: usize,
    pub errored: usize,
    pub users: Vec<ProvisionedUser>,
}

impl ProvisionReport {
    pub fn is_clean(&self) -> bool {
        self.errored == 0
    }
}

/// What a repair run did.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RepairReport {
    pub repaired: usize,
    pub skipped: usize,
}

/// Creates and repairs demo accounts across both seams.
pub struct UserProvisioner<'a> {
    directory: &'a dyn AuthDirectory,
    store: &'a dyn DocumentStore,
}

impl<'a> UserProvisioner<'a> {
    pub fn new(directory: &'a dyn AuthDirectory, store: &'a dyn DocumentStore) -> Self {
        Self { directory, store }
    }

    /// Returns the existing account for this email, or creates it. The
    /// boolean reports whether a create happened.
    pub async fn ensure_account(&self, user: &DemoUser) -> StoreResult<(AuthUser, bool)> {
        match self.directory.get_user_by_email(user.email).await {
            Ok(account) => Ok((account, false)),
            Err(StoreError::UserNotFound(_)) => {
                let account = self
                    .directory
                    .create_user(NewAuthUser {
                        email: user.email.to_string(),
                        password: user.password.to_string(),
                        display_name: user.name.to_string(),
                        email_verified: true,
                    })
                    .await?;
                Ok((account, true))
            }
            Err(err) => Err(err),
        }
    }

    fn profile_doc(
        user: &DemoUser,
        uid: &str,
        household_id: &str,
        stores: &[&str],
        now: DateTime<Utc>,
    ) -> UserDoc {
        UserDoc {
            id: uid.to_string(),
            name: user.name.to_string(),
            email: user.email.to_string(),
            household_id: household_id.to_string(),
            joined_at: now,
            last_login_at: now,
            preferred_stores: stores.iter().map(|store| store.to_string()).collect(),
            favorite_products: Vec::new(),
            weekly_budget: user.weekly_budget,
            is_admin: user.role.is_admin(),
            profile_image_url: None,
        }
    }

    /// Provisions a whole roster into one household, then removes the
    /// legacy placeholder documents.
    pub async fn provision(
        &self,
        users: &[DemoUser],
        household_id: &str,
        stores: &[&str],
        now: DateTime<Utc>,
    ) -> ProvisionReport {
        let mut report = ProvisionReport::default();

        for user in users {
            let (account, created) = match self.ensure_account(user).await {
                Ok(result) => result,
                Err(err) => {
                    warn!(email = user.email, %err, "account provisioning failed");
                    report.errored += 1;
                    continue;
                }
            };

            // Keep the auth display name in sync for pre-existing accounts.
            if !created && account.display_name.as_deref() != Some(user.name) {
                let update = AuthUserUpdate {
                    display_name: Some(user.name.to_string()),
                    password: None,
                };
                if let Err(err) = self.directory.update_user(&account.uid, update).await {
                    warn!(email = user.email, %err, "could not update display name");
                }
            }

            let doc = Self::profile_doc(user, &account.uid, household_id, stores, now);
            let write = match serde_json::to_value(&doc) {
                Ok(value) => WriteOp::set(collections::USERS, &account.uid, value),
                Err(err) => {
                    warn!(email = user.email, %err, "could not serialize profile");
                    report.errored += 1;
                    continue;
                }
            };
            if let Err(err) = self.store.commit(&[write]).await {
                warn!(email = user.email, %err, "profile write failed");
                report.errored += 1;
                continue;
            }

            if created {
                report.created += 1;
            } else {
                report.existing += 1;
            }
            info!(email = user.email, uid = %account.uid, created, "user provisioned");
            report.users.push(ProvisionedUser {
                uid: account.uid,
                email: user.email.to_string(),
                name: user.name.to_string(),
                password: user.password.to_string(),
                role: user.role,
                created,
            });
        }

        if let Err(err) = self.remove_placeholder_docs().await {
            warn!(%err, "placeholder cleanup failed");
            report.errored += 1;
        }

        report
    }

    /// Overwrites the legacy placeholder documents with the canonical
    /// snake_case shape and strips their stray camelCase fields.
    pub async fn repair_placeholder_docs(&self, now: DateTime<Utc>) -> DemoResult<RepairReport> {
        let mut report = RepairReport::default();

        for (id, name, email) in PLACEHOLDER_USERS {
            if self.store.get(collections::USERS, id).await?.is_none() {
                info!(id, "placeholder missing, skipping");
                report.skipped += 1;
                continue;
            }

            let doc = UserDoc {
                id: id.to_string(),
                name: name.to_string(),
                email: email.to_string(),
                household_id: DEMO_HOUSEHOLD_ID.to_string(),
                joined_at: now,
                last_login_at: now,
                preferred_stores: Vec::new(),
                favorite_products: Vec::new(),
                weekly_budget: 0.0,
                is_admin: true,
                profile_image_url: None,
            };
            self.store
                .commit(&[WriteOp::set(
                    collections::USERS,
                    *id,
                    serde_json::to_value(&doc)?,
                )])
                .await?;

            let mut strip = WriteOp::update(collections::USERS, *id, serde_json::Map::new());
            for field in LEGACY_USER_FIELDS {
                strip = strip.with_field_delete(*field);
            }
            self.store.commit(&[strip]).await?;

            info!(id, "placeholder repaired");
            report.repaired += 1;
        }

        Ok(report)
    }

    /// Deletes the legacy placeholder documents in one batch.
    pub async fn remove_placeholder_docs(&self) -> DemoResult<usize> {
        let writes: Vec<WriteOp> = LEGACY_PLACEHOLDER_IDS
            .iter()
            .map(|id| WriteOp::delete(collections::USERS, *id))
            .collect();
        let count = writes.len();
        self.store.commit(&writes).await?;
        Ok(count)
    }

    /// Looks up every roster email, reporting which exist.
    pub async fn lookup_all(&self, users: &[DemoUser]) -> Vec<(String, Option<AuthUser>)> {
        let mut results = Vec::with_capacity(users.len());
        for user in users {
            let found = match self.directory.get_user_by_email(user.email).await {
                Ok(account) => Some(account),
                Err(StoreError::UserNotFound(_)) => None,
                Err(err) => {
                    warn!(email = user.email, %err, "lookup failed");
                    None
                }
            };
            results.push((user.email.to_string(), found));
        }
        results
    }
}
