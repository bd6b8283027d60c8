//! In-process session registry.
//!
//! Maps opaque session tokens to user ids. Sessions live only in process
//! memory: a restart drops them all, and there is no expiry sweep, so a
//! token stays valid until it is explicitly revoked.

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

pub struct SessionRegistry {
    sessions: Arc<RwLock<HashMap<String, i64>>>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Issues a fresh token for the given user. Tokens are random v4 uuids,
    /// unguessable and unique among live sessions.
    pub async fn create(&self, user_id: i64) -> String {
        let token = Uuid::new_v4().to_string();
        let mut sessions = self.sessions.write().await;
        sessions.insert(token.clone(), user_id);
        token
    }

    /// Pure lookup. Absent means never issued, already revoked, or lost to
    /// a process restart.
    pub async fn resolve(&self, token: &str) -> Option<i64> {
        let sessions = self.sessions.read().await;
        sessions.get(token).copied()
    }

    /// Idempotent: revoking an unknown token is a no-op.
    pub async fn revoke(&self, token: &str) {
        let mut sessions = self.sessions.write().await;
        sessions.remove(token);
    }
}

impl Default for SessionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_and_resolve() {
        let registry = SessionRegistry::new();

        let token = registry.create(42).await;
        assert_eq!(registry.resolve(&token).await, Some(42));
        assert_eq!(registry.resolve("not-a-token").await, None);
    }

    #[tokio::test]
    async fn test_tokens_are_unique() {
        let registry = SessionRegistry::new();

        let a = registry.create(1).await;
        let b = registry.create(1).await;
        assert_ne!(a, b);
        assert_eq!(registry.resolve(&a).await, Some(1));
        assert_eq!(registry.resolve(&b).await, Some(1));
    }

    #[tokio::test]
    async fn test_revoke_is_idempotent() {
        let registry = SessionRegistry::new();

        let token = registry.create(7).await;
        registry.revoke(&token).await;
        assert_eq!(registry.resolve(&token).await, None);

        // Second revoke of the same token, and revoke of a token that was
        // never issued, must both be no-ops.
        registry.revoke(&token).await;
        registry.revoke("unknown").await;
    }
}
