//! Netid Resolver Domain Layer
pub mod backoff;
pub mod cache_entry;
pub mod config;
pub mod credentials;
pub mod errors;
pub mod network;
pub mod subscriber;
pub mod validators;

pub use backoff::BackoffState;
pub use cache_entry::CacheEntry;
pub use config::{CliOverrides, Config, ConfigError};
pub use credentials::Credentials;
pub use errors::ResolutionError;
pub use network::{KnownNetwork, NetworkId};
pub use subscriber::Msisdn;
