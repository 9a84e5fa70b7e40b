use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Upstream identity service (MSISDN → MCC/MNC lookup)
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UpstreamConfig {
    /// URL prefix; the MSISDN is appended verbatim
    /// (default: "http://localhost:8500/api/networkid/?msisdn=")
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in milliseconds (default: 10000)
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// User-Agent header sent with every lookup
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl UpstreamConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_ms: default_timeout_ms(),
            user_agent: default_user_agent(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:8500/api/networkid/?msisdn=".to_string()
}

fn default_timeout_ms() -> u64 {
    10_000
}

fn default_user_agent() -> String {
    concat!("netid-resolver/", env!("CARGO_PKG_VERSION")).to_string()
}
