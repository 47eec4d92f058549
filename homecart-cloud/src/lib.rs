//! Firestore and Identity Toolkit REST clients for the Homecart admin
//! tooling.
//!
//! Provides the production implementations of the `homecart-store` seams:
//! - [`FirestoreStore`] — documents get / equality queries / limited listing
//!   / batched `:commit` with update masks and server-time transforms
//! - [`IdentityDirectory`] — account lookup, creation, update, paginated
//!   listing and deletion against the Identity Toolkit admin endpoints
//!
//! Authentication uses an OAuth bearer token resolved once at startup from
//! the environment or the local `gcloud` helper; the service-account
//! credential file is loaded first and pins the project id.

pub mod config;
pub mod credentials;
pub mod error;
pub mod firestore;
pub mod identity;
pub mod values;

pub use config::AdminConfig;
pub use credentials::{resolve_access_token, ServiceAccount};
pub use error::{CloudError, CloudResult};
pub use firestore::FirestoreStore;
pub use identity::IdentityDirectory;
