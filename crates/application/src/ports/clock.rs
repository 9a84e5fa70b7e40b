use chrono::{DateTime, Utc};

/// Source of "now" for TTL and backoff decisions.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
