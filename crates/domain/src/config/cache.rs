use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Seconds a resolved network id stays fresh unless configured otherwise.
pub const DEFAULT_TTL_SECS: u64 = 30;

/// Resolution cache configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CacheConfig {
    /// Seconds a resolved network id is served without a new lookup (default: 30)
    #[serde(default = "default_ttl_secs")]
    pub ttl_secs: u64,

    /// Interval between stale-entry sweeps in seconds (default: 60)
    #[serde(default = "default_maintenance_interval_secs")]
    pub maintenance_interval_secs: u64,
}

impl CacheConfig {
    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl_secs)
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl_secs: default_ttl_secs(),
            maintenance_interval_secs: default_maintenance_interval_secs(),
        }
    }
}

fn default_ttl_secs() -> u64 {
    DEFAULT_TTL_SECS
}

fn default_maintenance_interval_secs() -> u64 {
    60
}
