//! reqwest-backed client for the editor backend.

use std::time::Duration;

use reqwest::{Client, Response};
use serde_json::Value;

use crate::ports::outbound::{ApiError, RawApiPort};

/// Where the editor backend listens by default.
pub const DEFAULT_EDITOR_API_URL: &str = "http://localhost:3001";

#[derive(Clone)]
pub struct ApiAdapter {
    client: Client,
    base_url: String,
}

impl ApiAdapter {
    pub fn new(base_url: &str) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Create client from the `EDITOR_API_URL` environment variable, falling
    /// back to the local default.
    pub fn from_env() -> Self {
        let base_url = std::env::var("EDITOR_API_URL")
            .unwrap_or_else(|_| DEFAULT_EDITOR_API_URL.to_string());
        Self::new(&base_url)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn json_or_error(response: Response) -> Result<Value, ApiError> {
        let status = response.status();
        if !status.is_success() {
            let text = response
                .text()
                .await
                .map_err(|e| ApiError::RequestFailed(e.to_string()))?;
            return Err(ApiError::HttpError {
                status: status.as_u16(),
                message: error_message(&text),
            });
        }

        response
            .json()
            .await
            .map_err(|e| ApiError::ParseError(e.to_string()))
    }
}

impl Default for ApiAdapter {
    fn default() -> Self {
        Self::new(DEFAULT_EDITOR_API_URL)
    }
}

#[async_trait::async_trait]
impl RawApiPort for ApiAdapter {
    async fn get_json(&self, path: &str) -> Result<Value, ApiError> {
        let response = self
            .client
            .get(self.url(path))
            .send()
            .await
            .map_err(|e| ApiError::RequestFailed(e.to_string()))?;
        Self::json_or_error(response).await
    }

    async fn put_json(&self, path: &str, body: &Value) -> Result<Value, ApiError> {
        let response = self
            .client
            .put(self.url(path))
            .json(body)
            .send()
            .await
            .map_err(|e| ApiError::RequestFailed(e.to_string()))?;
        Self::json_or_error(response).await
    }
}

/// The backend reports failures as `{"error": "..."}`; fall back to the raw text.
fn error_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v.get("error").and_then(Value::as_str).map(str::to_string))
        .unwrap_or_else(|| body.to_string())
}
