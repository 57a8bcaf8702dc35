//! HTTP client for the onboarding REST API.

use serde_json::Value;

use crate::admin::model::FieldAssignment;
use crate::error::ClientError;
use crate::users::model::UserRecord;

/// Thin reqwest wrapper over the REST surface.
///
/// Every call is a single round trip. Failures surface immediately as
/// [`ClientError`]; nothing is retried.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    /// GET /api/admin/config — the current field assignments.
    pub async fn fetch_config(&self) -> Result<Vec<FieldAssignment>, ClientError> {
        let resp = self
            .http
            .get(format!("{}/api/admin/config", self.base_url))
            .send()
            .await?;
        let resp = Self::check_status(resp).await?;
        Ok(resp.json().await?)
    }

    /// POST /api/admin/config — replace the stored assignments wholesale.
    pub async fn save_config(&self, config: &[FieldAssignment]) -> Result<(), ClientError> {
        let resp = self
            .http
            .post(format!("{}/api/admin/config", self.base_url))
            .json(config)
            .send()
            .await?;
        Self::check_status(resp).await?;
        Ok(())
    }

    /// POST /api/users — register a new user.
    pub async fn register(&self, record: &UserRecord) -> Result<(), ClientError> {
        let resp = self
            .http
            .post(format!("{}/api/users", self.base_url))
            .json(record)
            .send()
            .await?;
        Self::check_status(resp).await?;
        Ok(())
    }

    /// GET /api/users — all registered users, in insertion order.
    pub async fn list_users(&self) -> Result<Vec<UserRecord>, ClientError> {
        let resp = self
            .http
            .get(format!("{}/api/users", self.base_url))
            .send()
            .await?;
        let resp = Self::check_status(resp).await?;
        Ok(resp.json().await?)
    }

    /// Map a non-2xx response to [`ClientError::Status`], keeping the
    /// server's message when the body carries one.
    async fn check_status(resp: reqwest::Response) -> Result<reqwest::Response, ClientError> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }

        let message = resp
            .json::<Value>()
            .await
            .ok()
            .and_then(|body| {
                body.get("message")
                    .and_then(Value::as_str)
                    .map(str::to_string)
            })
            .unwrap_or_else(|| status.to_string());

        Err(ClientError::Status {
            status: status.as_u16(),
            message,
        })
    }
}
