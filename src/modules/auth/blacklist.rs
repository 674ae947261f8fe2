use std::collections::HashMap;

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

/// In-memory store of revoked session tokens.
///
/// Tokens are keyed by their full encoded form and mapped to the time they
/// were revoked. Revocation is permanent for the lifetime of the process,
/// entries are never evicted.
#[derive(Debug, Default)]
pub struct TokenBlacklist {
    revoked: RwLock<HashMap<String, DateTime<Utc>>>,
}

impl TokenBlacklist {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks a token as revoked. Revoking the same token again is a no-op
    /// and keeps the original revocation time.
    pub async fn revoke(&self, token: &str) {
        let mut revoked = self.revoked.write().await;
        revoked.entry(token.to_string()).or_insert_with(Utc::now);
    }

    /// Whether `token` has been revoked.
    pub async fn is_revoked(&self, token: &str) -> bool {
        self.revoked.read().await.contains_key(token)
    }

    /// Number of revoked tokens currently held.
    pub async fn count(&self) -> usize {
        self.revoked.read().await.len()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    #[tokio::test]
    async fn unknown_tokens_are_not_revoked() {
        let blacklist = TokenBlacklist::new();
        assert!(!blacklist.is_revoked("ey.some.token").await);
    }

    #[tokio::test]
    async fn revoked_tokens_stay_revoked() {
        let blacklist = TokenBlacklist::new();
        blacklist.revoke("ey.some.token").await;

        assert!(blacklist.is_revoked("ey.some.token").await);
        assert!(!blacklist.is_revoked("ey.other.token").await);
    }

    #[tokio::test]
    async fn revocation_is_idempotent() {
        let blacklist = TokenBlacklist::new();
        blacklist.revoke("ey.some.token").await;
        blacklist.revoke("ey.some.token").await;

        assert!(blacklist.is_revoked("ey.some.token").await);
        assert_eq!(blacklist.count().await, 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_revocations_all_land() {
        let blacklist = Arc::new(TokenBlacklist::new());

        let mut handles = Vec::new();
        for i in 0..32 {
            let blacklist = blacklist.clone();
            handles.push(tokio::spawn(async move {
                blacklist.revoke(&format!("token-{i}")).await;
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        assert_eq!(blacklist.count().await, 32);
        for i in 0..32 {
            assert!(blacklist.is_revoked(&format!("token-{i}")).await);
        }
    }
}
