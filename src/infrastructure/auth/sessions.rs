use chrono::{DateTime, Utc};
use dashmap::DashMap;

/// Sessions ended by logout before their token expired, keyed by session id.
///
/// Entries only need to live until the token's own expiry; after that the
/// signature check already rejects it, so `purge_expired` drops them.
#[derive(Debug, Default)]
pub struct SessionRegistry {
    revoked: DashMap<String, DateTime<Utc>>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn revoke(&self, session_id: &str, expires_at: DateTime<Utc>) {
        self.revoked.insert(session_id.to_string(), expires_at);
    }

    pub fn is_revoked(&self, session_id: &str) -> bool {
        self.revoked.contains_key(session_id)
    }

    /// Returns how many revocations were dropped.
    pub fn purge_expired(&self) -> usize {
        let now = Utc::now();
        let before = self.revoked.len();
        self.revoked.retain(|_, expires_at| *expires_at > now);
        before - self.revoked.len()
    }

    pub fn len(&self) -> usize {
        self.revoked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.revoked.is_empty()
    }
}
