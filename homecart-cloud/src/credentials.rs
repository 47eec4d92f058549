//! Service-account credential loading and access-token resolution.

use crate::config::AdminConfig;
use crate::error::{CloudError, CloudResult};
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

/// The parts of a service-account JSON file the tooling needs. The private
/// key itself is never read into memory here — token minting is delegated to
/// the ambient Google credential helpers.
#[derive(Clone, Debug, Deserialize)]
pub struct ServiceAccount {
    #[serde(rename = "type")]
    pub account_type: String,
    pub project_id: String,
    pub client_email: String,
}

impl ServiceAccount {
    /// Reads and validates the credential file. A missing file is a fatal
    /// setup error with a remediation hint, surfaced before any data
    /// operation runs.
    pub fn load(path: &Path) -> CloudResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|err| {
            CloudError::Credentials(format!(
                "cannot read service account file {}: {err}. Download one from the \
                 console (Project settings → Service accounts → Generate new private key) \
                 and point GOOGLE_APPLICATION_CREDENTIALS at it.",
                path.display()
            ))
        })?;

        let account: ServiceAccount = serde_json::from_str(&raw).map_err(|err| {
            CloudError::Credentials(format!(
                "malformed service account file {}: {err}",
                path.display()
            ))
        })?;

        if account.account_type != "service_account" {
            return Err(CloudError::Credentials(format!(
                "{} is not a service account key (type: {})",
                path.display(),
                account.account_type
            )));
        }

        debug!(project = %account.project_id, email = %account.client_email, "loaded service account");
        Ok(account)
    }
}

/// Resolves the OAuth bearer token the clients authenticate with.
///
/// `GOOGLE_OAUTH_ACCESS_TOKEN` wins when set; otherwise the token is minted
/// by `gcloud auth application-default print-access-token` against the
/// configured credential file.
pub async fn resolve_access_token(config: &AdminConfig) -> CloudResult<String> {
    if let Some(token) = &config.access_token {
        return Ok(token.clone());
    }

    let output = tokio::process::Command::new("gcloud")
        .args(["auth", "application-default", "print-access-token"])
        .env("GOOGLE_APPLICATION_CREDENTIALS", &config.credentials_path)
        .output()
        .await
        .map_err(|err| {
            CloudError::Credentials(format!(
                "failed to run gcloud for an access token: {err}. Install the \
                 Google Cloud SDK or export GOOGLE_OAUTH_ACCESS_TOKEN."
            ))
        })?;

    if !output.status.success() {
        return Err(CloudError::Credentials(format!(
            "gcloud could not mint an access token: {}",
            String::from_utf8_lossy(&output.stderr).trim()
        )));
    }

    let token = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if token.is_empty() {
        return Err(CloudError::Credentials(
            "gcloud returned an empty access token".to_string(),
        ));
    }
    Ok(token)
}
