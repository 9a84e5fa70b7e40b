use serde::{Deserialize, Serialize};

/// Names of the settings rows that hold the identity service credentials
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CredentialsConfig {
    #[serde(default = "default_username_key")]
    pub username_key: String,

    #[serde(default = "default_secret_key")]
    pub secret_key: String,
}

impl Default for CredentialsConfig {
    fn default() -> Self {
        Self {
            username_key: default_username_key(),
            secret_key: default_secret_key(),
        }
    }
}

fn default_username_key() -> String {
    "ApiUsername".to_string()
}

fn default_secret_key() -> String {
    "ApiPassword".to_string()
}
