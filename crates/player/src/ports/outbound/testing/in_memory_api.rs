//! In-memory stand-in for the editor backend.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use serde_json::{json, Value};

use crate::ports::outbound::{ApiError, RawApiPort};

/// A PUT the view-model sent, in order.
#[derive(Debug, Clone, PartialEq)]
pub struct SentPut {
    pub path: String,
    pub body: Value,
}

/// Serves whatever was last PUT to a path, `[]` for paths never written.
#[derive(Debug, Default)]
pub struct InMemoryApi {
    documents: Mutex<HashMap<String, Value>>,
    puts: Mutex<Vec<SentPut>>,
    offline: AtomicBool,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl InMemoryApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_document(self, path: &str, body: Value) -> Self {
        lock(&self.documents).insert(path.to_string(), body);
        self
    }

    /// Make every request fail as if the backend were unreachable.
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    pub fn document(&self, path: &str) -> Value {
        lock(&self.documents)
            .get(path)
            .cloned()
            .unwrap_or_else(|| json!([]))
    }

    pub fn sent_puts(&self) -> Vec<SentPut> {
        lock(&self.puts).clone()
    }

    fn check_online(&self) -> Result<(), ApiError> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(ApiError::RequestFailed("connection refused".to_string()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl RawApiPort for InMemoryApi {
    async fn get_json(&self, path: &str) -> Result<Value, ApiError> {
        self.check_online()?;
        Ok(self.document(path))
    }

    async fn put_json(&self, path: &str, body: &Value) -> Result<Value, ApiError> {
        self.check_online()?;
        lock(&self.documents).insert(path.to_string(), body.clone());
        lock(&self.puts).push(SentPut {
            path: path.to_string(),
            body: body.clone(),
        });
        Ok(json!({ "success": true }))
    }
}
