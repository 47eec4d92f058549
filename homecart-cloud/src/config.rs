//! Admin client configuration.

use crate::credentials::ServiceAccount;
use crate::error::CloudResult;
use std::path::PathBuf;

const FIRESTORE_BASE_URL: &str = "https://firestore.googleapis.com/v1";
const IDENTITY_BASE_URL: &str = "https://identitytoolkit.googleapis.com/v1";
const DEFAULT_CREDENTIALS_FILE: &str = "firebase-service-account.json";

/// Configuration for one admin command run. Built once at process start and
/// passed by parameter into every client — nothing here is process-global.
#[derive(Clone, Debug)]
pub struct AdminConfig {
    /// Cloud project id, taken from the service account file unless
    /// `HOMECART_PROJECT_ID` overrides it.
    pub project_id: String,

    /// Base URL of the document store API (overridden in tests).
    pub firestore_base_url: String,

    /// Base URL of the auth admin API (overridden in tests).
    pub identity_base_url: String,

    /// Path of the service-account credential file.
    pub credentials_path: PathBuf,

    /// Pre-minted OAuth access token, if the environment supplies one.
    pub access_token: Option<String>,
}

impl AdminConfig {
    /// Loads configuration from the environment. Fails before any data
    /// operation when the credential file is missing or malformed.
    pub fn from_env() -> CloudResult<Self> {
        let credentials_path = std::env::var_os("GOOGLE_APPLICATION_CREDENTIALS")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CREDENTIALS_FILE));

        let account = ServiceAccount::load(&credentials_path)?;
        let project_id =
            std::env::var("HOMECART_PROJECT_ID").unwrap_or_else(|_| account.project_id.clone());

        Ok(Self {
            project_id,
            firestore_base_url: FIRESTORE_BASE_URL.to_string(),
            identity_base_url: IDENTITY_BASE_URL.to_string(),
            credentials_path,
            access_token: std::env::var("GOOGLE_OAUTH_ACCESS_TOKEN").ok(),
        })
    }

    /// A config pointed at a local mock server (tests only need the URLs
    /// and a project id).
    pub fn for_base_url(base_url: &str, project_id: &str) -> Self {
        Self {
            project_id: project_id.to_string(),
            firestore_base_url: base_url.to_string(),
            identity_base_url: base_url.to_string(),
            credentials_path: PathBuf::from(DEFAULT_CREDENTIALS_FILE),
            access_token: Some("test-token".to_string()),
        }
    }
}
