use crate::network::NetworkId;
use chrono::{DateTime, Duration, Utc};

/// Resolved network id together with the moment it was stored.
///
/// Entries are replaced, never mutated. Staleness is decided at read time.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    pub value: NetworkId,
    pub set_at: DateTime<Utc>,
}

impl CacheEntry {
    pub fn new(value: NetworkId, set_at: DateTime<Utc>) -> Self {
        Self { value, set_at }
    }

    #[inline]
    pub fn is_fresh(&self, now: DateTime<Utc>, ttl: Duration) -> bool {
        now - self.set_at < ttl
    }
}
