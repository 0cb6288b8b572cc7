use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tokio::sync::Mutex as AsyncMutex;

use std::collections::HashMap;
use std::future::Future;
use std::sync::{Arc, Mutex};
use std::time::{Duration, SystemTime};

use crate::common::ApiError;

/// Default freshness window for cached view data.
const VIEW_TTL: Duration = Duration::from_secs(30);

/// Per-view-key cache for backend reads.
///
/// Concurrent requests for the same key are deduplicated: a per-key
/// async mutex serializes the fetch, so at most one backend call is in
/// flight per key while followers wait and then read the stored value.
/// Mutations invalidate their dependent keys explicitly instead of
/// relying on any ordering between responses and refreshes.
pub struct ViewCache {
    ttl: Duration,
    entries: Mutex<HashMap<String, (Value, SystemTime)>>,
    gates: Mutex<HashMap<String, Arc<AsyncMutex<()>>>>,
}

impl ViewCache {
    pub fn new() -> Self {
        Self::with_ttl(VIEW_TTL)
    }

    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: Mutex::new(HashMap::new()),
            gates: Mutex::new(HashMap::new()),
        }
    }

    fn fresh(&self, key: &str) -> Option<Value> {
        let entries = self
            .entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let (value, stored_at) = entries.get(key)?;
        let age = SystemTime::now()
            .duration_since(*stored_at)
            .unwrap_or(Duration::ZERO);
        (age < self.ttl).then(|| value.clone())
    }

    fn store(&self, key: &str, value: Value) {
        let mut entries = self
            .entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        entries.insert(key.to_string(), (value, SystemTime::now()));
    }

    pub fn invalidate(&self, key: &str) {
        let mut entries = self
            .entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        entries.remove(key);
    }

    fn gate(&self, key: &str) -> Arc<AsyncMutex<()>> {
        let mut gates = self
            .gates
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        gates.entry(key.to_string()).or_default().clone()
    }

    /// Cached value for the key, or run `fetch` (once across concurrent
    /// callers) and cache its result.
    pub async fn get_or_fetch<T, F, Fut>(&self, key: &str, fetch: F) -> Result<T, ApiError>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, ApiError>>,
    {
        if let Some(value) = self.fresh(key) {
            if let Ok(typed) = serde_json::from_value(value) {
                return Ok(typed);
            }
            // Shape changed underneath us; fall through and re-fetch.
            self.invalidate(key);
        }

        let gate = self.gate(key);
        let _held = gate.lock().await;

        // A concurrent caller may have filled the entry while we waited.
        if let Some(value) = self.fresh(key) {
            if let Ok(typed) = serde_json::from_value(value) {
                return Ok(typed);
            }
        }

        let fetched = fetch().await?;
        if let Ok(value) = serde_json::to_value(&fetched) {
            self.store(key, value);
        }
        Ok(fetched)
    }
}

impl Default for ViewCache {
    fn default() -> Self {
        Self::new()
    }
}
