use async_trait::async_trait;
use reqwest::StatusCode;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use serde_json::json;

use crate::{
    config::Config,
    errors::{AppError, AppResult},
};

/// Account administration on the external identity provider, keyed by opaque uid.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn create_user(&self, email: String, password: String) -> AppResult<String>;
    async fn delete_user(&self, uid: String) -> AppResult<()>;
    async fn update_email(&self, uid: String, email: String) -> AppResult<()>;
}

#[derive(Debug, Deserialize)]
struct CreatedAccount {
    #[serde(rename = "localId")]
    local_id: String,
}

#[derive(Debug, Deserialize)]
struct ProviderErrorBody {
    error: ProviderErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ProviderErrorDetail {
    #[serde(default)]
    message: String,
}

/// Maps a rejected identity call: client errors become the caller's problem,
/// everything else is a provider failure.
fn classify_failure(status: StatusCode, body: &str) -> AppError {
    let message = serde_json::from_str::<ProviderErrorBody>(body)
        .map(|b| b.error.message)
        .unwrap_or_else(|_| body.to_string());

    if message.contains("USER_NOT_FOUND") {
        AppError::NotFound(format!("User not found: {}", message))
    } else if status.is_client_error() {
        AppError::ValidationError(message)
    } else {
        AppError::provider("Identity provider call failed", format!("{}: {}", status, message))
    }
}

pub struct RestIdentityProvider {
    http: reqwest::Client,
    base_url: String,
    project_id: String,
    admin_token: SecretString,
}

impl RestIdentityProvider {
    pub fn new(config: &Config, http: reqwest::Client) -> Self {
        Self {
            http,
            base_url: config.identity_api_base.trim_end_matches('/').to_string(),
            project_id: config.identity_project_id.clone(),
            admin_token: config.identity_admin_token.clone(),
        }
    }

    fn accounts_url(&self, action: Option<&str>) -> String {
        let base = format!("{}/v1/projects/{}/accounts", self.base_url, self.project_id);
        match action {
            Some(action) => format!("{}:{}", base, action),
            None => base,
        }
    }

    async fn post(&self, url: String, body: serde_json::Value) -> AppResult<String> {
        let response = self
            .http
            .post(&url)
            .bearer_auth(self.admin_token.expose_secret())
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::provider("Identity provider call failed", e))?;

        let status = response.status();
        let text = response.text().await.unwrap_or_default();
        if !status.is_success() {
            log::error!("Identity call {} failed with {}: {}", url, status, text);
            return Err(classify_failure(status, &text));
        }
        Ok(text)
    }
}

#[async_trait]
impl IdentityProvider for RestIdentityProvider {
    async fn create_user(&self, email: String, password: String) -> AppResult<String> {
        let text = self
            .post(
                self.accounts_url(None),
                json!({ "email": email, "password": password }),
            )
            .await?;

        let account: CreatedAccount = serde_json::from_str(&text).map_err(|e| {
            AppError::provider("Identity provider returned an unexpected body", e)
        })?;
        Ok(account.local_id)
    }

    async fn delete_user(&self, uid: String) -> AppResult<()> {
        self.post(self.accounts_url(Some("delete")), json!({ "localId": uid }))
            .await?;
        Ok(())
    }

    async fn update_email(&self, uid: String, email: String) -> AppResult<()> {
        self.post(
            self.accounts_url(Some("update")),
            json!({ "localId": uid, "email": email }),
        )
        .await?;
        Ok(())
    }
}
