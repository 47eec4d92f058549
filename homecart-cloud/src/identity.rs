//! REST client for the auth provider's user directory.

use crate::config::AdminConfig;
use crate::error::{CloudError, CloudResult};
use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use homecart_store::{AuthDirectory, AuthUser, AuthUserUpdate, NewAuthUser, StoreResult};
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

/// The provider pages account listings at this size.
const LIST_PAGE_SIZE: usize = 100;

/// Directory client over the Identity Toolkit v1 admin endpoints.
pub struct IdentityDirectory {
    client: Client,
    base_url: String,
    project_id: String,
    token: String,
}

/// One account as the API reports it. Creation/sign-in times come back as
/// millisecond strings.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiUser {
    local_id: String,
    #[serde(default)]
    email: String,
    #[serde(default)]
    display_name: Option<String>,
    #[serde(default)]
    email_verified: bool,
    #[serde(default)]
    created_at: Option<String>,
    #[serde(default)]
    last_login_at: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: Option<ApiErrorDetail>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    #[serde(default)]
    message: String,
}

impl From<ApiUser> for AuthUser {
    fn from(user: ApiUser) -> Self {
        AuthUser {
            uid: user.local_id,
            email: user.email,
            display_name: user.display_name,
            email_verified: user.email_verified,
            created_at: parse_millis(user.created_at.as_deref()),
            last_sign_in_at: parse_millis(user.last_login_at.as_deref()),
        }
    }
}

fn parse_millis(raw: Option<&str>) -> Option<DateTime<Utc>> {
    let millis: i64 = raw?.parse().ok()?;
    Utc.timestamp_millis_opt(millis).single()
}

impl IdentityDirectory {
    pub fn new(config: &AdminConfig, token: String) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .expect("failed to build HTTP client");

        Self {
            client,
            base_url: config.identity_base_url.clone(),
            project_id: config.project_id.clone(),
            token,
        }
    }

    fn accounts_url(&self, suffix: &str) -> String {
        format!(
            "{}/projects/{}/accounts{suffix}",
            self.base_url, self.project_id
        )
    }

    /// Reads the error message out of a failed response. The API signals
    /// domain conditions (`EMAIL_EXISTS`, `USER_NOT_FOUND`) through it.
    async fn error_message(resp: reqwest::Response) -> String {
        let status = resp.status();
        match resp.json::<ApiErrorBody>().await {
            Ok(ApiErrorBody {
                error: Some(detail),
            }) if !detail.message.is_empty() => detail.message,
            _ => format!("HTTP {status}"),
        }
    }

    async fn lookup(&self, email: &str) -> CloudResult<Option<AuthUser>> {
        let resp = self
            .client
            .post(self.accounts_url(":lookup"))
            .bearer_auth(&self.token)
            .json(&json!({ "email": [email] }))
            .send()
            .await?;

        if !resp.status().is_success() {
            let message = Self::error_message(resp).await;
            if message.contains("USER_NOT_FOUND") {
                return Ok(None);
            }
            return Err(CloudError::Api(format!("account lookup: {message}")));
        }

        #[derive(Deserialize)]
        struct Resp {
            #[serde(default)]
            users: Vec<ApiUser>,
        }
        let data: Resp = resp.json().await?;
        Ok(data.users.into_iter().next().map(AuthUser::from))
    }
}

#[async_trait]
impl AuthDirectory for IdentityDirectory {
    async fn get_user_by_email(&self, email: &str) -> StoreResult<AuthUser> {
        let found = self.lookup(email).await?;
        found.ok_or_else(|| CloudError::UserNotFound(email.to_string()).into())
    }

    async fn create_user(&self, new_user: NewAuthUser) -> StoreResult<AuthUser> {
        let resp = self
            .client
            .post(self.accounts_url(""))
            .bearer_auth(&self.token)
            .json(&json!({
                "email": new_user.email,
                "password": new_user.password,
                "displayName": new_user.display_name,
                "emailVerified": new_user.email_verified,
            }))
            .send()
            .await
            .map_err(CloudError::from)?;

        if !resp.status().is_success() {
            let message = Self::error_message(resp).await;
            if message.contains("EMAIL_EXISTS") || message.contains("DUPLICATE_EMAIL") {
                return Err(CloudError::DuplicateEmail(new_user.email).into());
            }
            return Err(CloudError::Api(format!("account create: {message}")).into());
        }

        #[derive(Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct Resp {
            local_id: String,
        }
        let data: Resp = resp.json().await.map_err(CloudError::from)?;
        debug!(uid = %data.local_id, "auth account created");

        Ok(AuthUser {
            uid: data.local_id,
            email: new_user.email,
            display_name: Some(new_user.display_name).filter(|name| !name.is_empty()),
            email_verified: new_user.email_verified,
            created_at: Some(Utc::now()),
            last_sign_in_at: None,
        })
    }

    async fn update_user(&self, uid: &str, update: AuthUserUpdate) -> StoreResult<AuthUser> {
        let mut body = json!({ "localId": uid });
        if let Some(display_name) = &update.display_name {
            body["displayName"] = json!(display_name);
        }
        if let Some(password) = &update.password {
            body["password"] = json!(password);
        }

        let resp = self
            .client
            .post(self.accounts_url(":update"))
            .bearer_auth(&self.token)
            .json(&body)
            .send()
            .await
            .map_err(CloudError::from)?;

        if !resp.status().is_success() {
            let message = Self::error_message(resp).await;
            if message.contains("USER_NOT_FOUND") {
                return Err(CloudError::UserNotFound(uid.to_string()).into());
            }
            return Err(CloudError::Api(format!("account update: {message}")).into());
        }

        let user: ApiUser = resp.json().await.map_err(CloudError::from)?;
        Ok(user.into())
    }

    async fn list_users(&self) -> StoreResult<Vec<AuthUser>> {
        #[derive(Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct Resp {
            #[serde(default)]
            users: Vec<ApiUser>,
            #[serde(default)]
            next_page_token: Option<String>,
        }

        let mut users = Vec::new();
        let mut page_token: Option<String> = None;

        loop {
            let mut request = self
                .client
                .get(self.accounts_url(":batchGet"))
                .bearer_auth(&self.token)
                .query(&[("maxResults", LIST_PAGE_SIZE.to_string())]);
            if let Some(token) = &page_token {
                request = request.query(&[("nextPageToken", token)]);
            }

            let resp = request.send().await.map_err(CloudError::from)?;
            if !resp.status().is_success() {
                let message = Self::error_message(resp).await;
                return Err(CloudError::Api(format!("account list: {message}")).into());
            }

            let page: Resp = resp.json().await.map_err(CloudError::from)?;
            users.extend(page.users.into_iter().map(AuthUser::from));

            match page.next_page_token {
                Some(token) if !token.is_empty() => page_token = Some(token),
                _ => break,
            }
        }

        Ok(users)
    }

    async fn delete_user(&self, uid: &str) -> StoreResult<()> {
        let resp = self
            .client
            .post(self.accounts_url(":delete"))
            .bearer_auth(&self.token)
            .json(&json!({ "localId": uid }))
            .send()
            .await
            .map_err(CloudError::from)?;

        if !resp.status().is_success() {
            let message = Self::error_message(resp).await;
            if message.contains("USER_NOT_FOUND") {
                return Err(CloudError::UserNotFound(uid.to_string()).into());
            }
            return Err(CloudError::Api(format!("account delete: {message}")).into());
        }
        Ok(())
    }
}
