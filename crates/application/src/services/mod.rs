pub mod backoff_tracker;
pub mod network_registry;
pub mod resolution_cache;

pub use backoff_tracker::BackoffTracker;
pub use network_registry::NetworkRegistry;
pub use resolution_cache::{CacheStats, ResolutionCache};
