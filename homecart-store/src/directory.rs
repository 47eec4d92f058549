//! The auth-directory seam.

use crate::error::StoreResult;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// A user account as the auth provider reports it.
#[derive(Clone, Debug, PartialEq)]
pub struct AuthUser {
    pub uid: String,
    pub email: String,
    pub display_name: Option<String>,
    pub email_verified: bool,
    pub created_at: Option<DateTime<Utc>>,
    pub last_sign_in_at: Option<DateTime<Utc>>,
}

/// Fields for creating an account.
#[derive(Clone, Debug)]
pub struct NewAuthUser {
    pub email: String,
    pub password: String,
    pub display_name: String,
    pub email_verified: bool,
}

/// Partial account update; `None` fields are left untouched.
#[derive(Clone, Debug, Default)]
pub struct AuthUserUpdate {
    pub display_name: Option<String>,
    pub password: Option<String>,
}

/// Administrative access to the auth provider's user directory.
#[async_trait]
pub trait AuthDirectory: Send + Sync {
    /// Errors with [`crate::StoreError::UserNotFound`] when no account has
    /// this email, so callers can distinguish "create it" from real failures.
    async fn get_user_by_email(&self, email: &str) -> StoreResult<AuthUser>;

    async fn create_user(&self, new_user: NewAuthUser) -> StoreResult<AuthUser>;

    async fn update_user(&self, uid: &str, update: AuthUserUpdate) -> StoreResult<AuthUser>;

    /// Every account in the directory. Implementations page through the
    /// provider's listing (page size 100) and return the concatenation.
    async fn list_users(&self) -> StoreResult<Vec<AuthUser>>;

    async fn delete_user(&self, uid: &str) -> StoreResult<()>;
}
