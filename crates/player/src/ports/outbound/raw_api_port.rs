//! Raw API Port - Object-safe HTTP boundary
//!
//! Services store the backend client behind `Arc<dyn RawApiPort>` and do their
//! own typed (de)serialization on top of `serde_json::Value`.

use serde_json::Value;

use super::ApiError;

#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait RawApiPort: Send + Sync {
    async fn get_json(&self, path: &str) -> Result<Value, ApiError>;

    async fn put_json(&self, path: &str, body: &Value) -> Result<Value, ApiError>;
}
