use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, SystemTime};

use crate::api::ApiClient;
use crate::common::ApiError;
use crate::models::Member;

/// Freshness window for a cached identity check.
const SESSION_TTL: Duration = Duration::from_secs(60);

/// Cache of resolved session identities, keyed by session token.
///
/// A fresh entry answers the route guard without a network call; a
/// stale or missing entry triggers exactly one `/auth/me` fetch. The
/// fetch is never retried: a failed identity check is authoritative.
pub struct SessionCache {
    ttl: Duration,
    entries: Mutex<HashMap<String, (Member, SystemTime)>>,
}

impl SessionCache {
    pub fn new() -> Self {
        Self::with_ttl(SESSION_TTL)
    }

    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Cached member for a token, if still inside the freshness window.
    pub fn get(&self, token: &str) -> Option<Member> {
        let entries = self
            .entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        let (member, stored_at) = entries.get(token)?;
        let age = SystemTime::now()
            .duration_since(*stored_at)
            .unwrap_or(Duration::ZERO);
        (age < self.ttl).then(|| member.clone())
    }

    pub fn store(&self, token: &str, member: Member) {
        let mut entries = self
            .entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        entries.insert(token.to_string(), (member, SystemTime::now()));
    }

    /// Drop a token's entry. Called on login and logout so the next
    /// guarded request re-fetches identity.
    pub fn invalidate(&self, token: &str) {
        let mut entries = self
            .entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        entries.remove(token);
    }

    /// Resolve a token to a member, consulting the cache first.
    pub async fn resolve(&self, api: &ApiClient, token: &str) -> Result<Member, ApiError> {
        if let Some(member) = self.get(token) {
            return Ok(member);
        }
        let member = api.me(token).await?;
        self.store(token, member.clone());
        Ok(member)
    }
}

impl Default for SessionCache {
    fn default() -> Self {
        Self::new()
    }
}
