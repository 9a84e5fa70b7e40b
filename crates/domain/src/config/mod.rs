//! Configuration module for the Netid resolver
//!
//! This module contains all configuration structures organized by concern:
//! - `root`: Main configuration and CLI overrides
//! - `upstream`: Identity service endpoint and timeout
//! - `cache`: Resolution cache TTL and maintenance interval
//! - `credentials`: Settings keys holding the API credentials
//! - `database`: Directory/settings database
//! - `logging`: Logging settings
//! - `errors`: Configuration errors

pub mod cache;
pub mod credentials;
pub mod database;
pub mod errors;
pub mod logging;
pub mod root;
pub mod upstream;

pub use cache::{CacheConfig, DEFAULT_TTL_SECS};
pub use credentials::CredentialsConfig;
pub use database::DatabaseConfig;
pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use root::{CliOverrides, Config};
pub use upstream::UpstreamConfig;
