//! Per-run client wiring.

use anyhow::{Context, Result};
use homecart_cloud::{resolve_access_token, AdminConfig, FirestoreStore, IdentityDirectory};

/// Everything one command run needs. Built once in `main` and passed down —
/// there is no global client state.
pub struct AdminContext {
    pub config: AdminConfig,
    pub store: FirestoreStore,
    pub directory: IdentityDirectory,
}

impl AdminContext {
    /// Loads configuration and credentials, resolves the access token, and
    /// builds both clients. Any failure here aborts the run before data is
    /// touched.
    pub async fn connect() -> Result<Self> {
        let config = AdminConfig::from_env().context("setup failed")?;
        let token = resolve_access_token(&config)
            .await
            .context("could not resolve an access token")?;

        Ok(Self {
            store: FirestoreStore::new(&config, token.clone()),
            directory: IdentityDirectory::new(&config, token),
            config,
        })
    }
}
