use serde::{Deserialize, Serialize};
use std::path::Path;

use super::cache::CacheConfig;
use super::credentials::CredentialsConfig;
use super::database::DatabaseConfig;
use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::upstream::UpstreamConfig;
use crate::validators::validate_url;

/// Root configuration, one section per concern
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub upstream: UpstreamConfig,

    #[serde(default)]
    pub cache: CacheConfig,

    #[serde(default)]
    pub credentials: CredentialsConfig,

    #[serde(default)]
    pub database: DatabaseConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Values given on the command line; they win over the config file
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub base_url: Option<String>,
    pub database_path: Option<String>,
    pub log_level: Option<String>,
}

impl Config {
    /// Load from `path` (or defaults when no file is given or it does not
    /// exist) and apply CLI overrides.
    pub fn load(path: Option<&str>, overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(p) if Path::new(p).exists() => {
                let raw = std::fs::read_to_string(p).map_err(|source| ConfigError::Io {
                    path: p.to_string(),
                    source,
                })?;
                Self::from_toml(&raw)?
            }
            _ => Self::default(),
        };

        config.apply_overrides(overrides);
        Ok(config)
    }

    pub fn from_toml(raw: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(raw)?)
    }

    pub fn apply_overrides(&mut self, overrides: CliOverrides) {
        if let Some(base_url) = overrides.base_url {
            self.upstream.base_url = base_url;
        }
        if let Some(path) = overrides.database_path {
            self.database.path = path;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_url(&self.upstream.base_url)
            .map_err(|e| ConfigError::Validation(format!("upstream.base_url: {e}")))?;

        if self.upstream.timeout_ms == 0 {
            return Err(ConfigError::Validation(
                "upstream.timeout_ms must be greater than 0".to_string(),
            ));
        }
        if self.cache.ttl_secs == 0 {
            return Err(ConfigError::Validation(
                "cache.ttl_secs must be greater than 0".to_string(),
            ));
        }
        if self.cache.maintenance_interval_secs == 0 {
            return Err(ConfigError::Validation(
                "cache.maintenance_interval_secs must be greater than 0".to_string(),
            ));
        }
        if self.credentials.username_key.is_empty() || self.credentials.secret_key.is_empty() {
            return Err(ConfigError::Validation(
                "credentials keys cannot be empty".to_string(),
            ));
        }
        if self.database.path.is_empty() {
            return Err(ConfigError::Validation(
                "database.path cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}
