use netid_application::services::ResolutionCache;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

/// Periodically drops resolution cache entries that are past their TTL.
pub struct CacheMaintenanceJob {
    cache: Arc<ResolutionCache>,
    interval_secs: u64,
    shutdown: CancellationToken,
}

impl CacheMaintenanceJob {
    pub fn new(cache: Arc<ResolutionCache>) -> Self {
        Self {
            cache,
            interval_secs: 60,
            shutdown: CancellationToken::new(),
        }
    }

    pub fn with_interval(mut self, interval_secs: u64) -> Self {
        self.interval_secs = interval_secs;
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    /// One sweep; returns the number of entries removed.
    pub fn run_once(&self) -> usize {
        let purged = self.cache.purge_stale();
        let stats = self.cache.stats();

        if purged > 0 {
            info!(
                purged,
                entries = stats.entries,
                in_flight = stats.in_flight,
                backoff = stats.backoff_entries,
                "Stale cache entries purged"
            );
        } else {
            debug!(
                entries = stats.entries,
                in_flight = stats.in_flight,
                backoff = stats.backoff_entries,
                "Cache maintenance: nothing to purge"
            );
        }

        purged
    }

    pub async fn start(self: Arc<Self>) {
        info!(
            interval_secs = self.interval_secs,
            "Starting cache maintenance job"
        );

        tokio::spawn(async move {
            let mut interval = tokio::time::interval(Duration::from_secs(self.interval_secs));
            loop {
                tokio::select! {
                    _ = self.shutdown.cancelled() => {
                        info!("CacheMaintenanceJob: shutting down");
                        break;
                    }
                    _ = interval.tick() => {
                        self.run_once();
                    }
                }
            }
        });
    }
}
