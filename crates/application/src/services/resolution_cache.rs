use crate::ports::{Clock, IdentityLookup};
use crate::services::BackoffTracker;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use futures::future::{BoxFuture, FutureExt, Shared};
use netid_domain::config::DEFAULT_TTL_SECS;
use netid_domain::{CacheEntry, Msisdn, NetworkId, ResolutionError};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, instrument, warn};

type LookupOutcome = Result<NetworkId, ResolutionError>;
type PendingLookup = Shared<BoxFuture<'static, LookupOutcome>>;

/// Default time a resolved network id is served without a new lookup.
pub const DEFAULT_TTL: Duration = Duration::from_secs(DEFAULT_TTL_SECS);

/// Longest backoff key kept for input that does not parse as an MSISDN.
const MAX_INVALID_KEY_CHARS: usize = 32;

/// MSISDN → network id resolution with TTL caching, single-flight
/// coalescing and per-subscriber backoff.
///
/// Per key: `NoEntry → InFlight → Cached(ttl) → NoEntry`. A failed lookup
/// leaves the key uncached; `try_resolve` additionally records the failure
/// with the [`BackoffTracker`].
pub struct ResolutionCache {
    lookup: Arc<dyn IdentityLookup>,
    backoff: Arc<BackoffTracker>,
    clock: Arc<dyn Clock>,
    entries: Arc<DashMap<Msisdn, CacheEntry>>,
    in_flight: Arc<DashMap<Msisdn, PendingLookup>>,
    ttl: chrono::Duration,
}

/// Point-in-time table sizes, for logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    pub entries: usize,
    pub in_flight: usize,
    pub backoff_entries: usize,
}

impl ResolutionCache {
    pub fn new(
        lookup: Arc<dyn IdentityLookup>,
        backoff: Arc<BackoffTracker>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            lookup,
            backoff,
            clock,
            entries: Arc::new(DashMap::new()),
            in_flight: Arc::new(DashMap::new()),
            ttl: to_chrono(DEFAULT_TTL),
        }
    }

    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = to_chrono(ttl);
        self
    }

    /// Resolve unconditionally: serve a fresh entry or perform (or join) the
    /// lookup. Errors from the lookup are returned as-is.
    #[instrument(skip(self), level = "debug")]
    pub async fn resolve(&self, key: &str) -> Result<NetworkId, ResolutionError> {
        let msisdn = Msisdn::parse(key)?;
        self.resolve_msisdn(&msisdn).await
    }

    /// Resolve for normal traffic: skipped while the subscriber is backing
    /// off, and every failure turns into `None` plus a backoff record.
    pub async fn try_resolve(&self, key: &str) -> Option<NetworkId> {
        let parsed = Msisdn::parse(key);
        let backoff_key = match &parsed {
            Ok(msisdn) => msisdn.as_str(),
            Err(_) => invalid_key_prefix(key),
        };

        if !self.backoff.should_attempt(backoff_key) {
            debug!(key = backoff_key, "Lookup skipped, subscriber is backing off");
            return None;
        }

        let result = match &parsed {
            Ok(msisdn) => self.resolve_msisdn(msisdn).await,
            Err(e) => Err(e.clone()),
        };

        match result {
            Ok(network_id) => {
                self.backoff.record_success(backoff_key);
                Some(network_id)
            }
            Err(e) => {
                self.backoff.record_failure(backoff_key);
                warn!(key = backoff_key, error = %e, "Network id resolution failed");
                None
            }
        }
    }

    /// Drop the cached entry so the next call performs a lookup.
    pub fn invalidate(&self, key: &str) -> bool {
        match Msisdn::parse(key) {
            Ok(msisdn) => self.entries.remove(&msisdn).is_some(),
            Err(_) => false,
        }
    }

    /// Remove entries past their TTL. Callers cannot tell the difference:
    /// a stale entry already behaves like a missing one.
    pub fn purge_stale(&self) -> usize {
        let now = self.clock.now();
        let ttl = self.ttl;
        let before = self.entries.len();

        self.entries.retain(|_, entry| entry.is_fresh(now, ttl));

        before.saturating_sub(self.entries.len())
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            entries: self.entries.len(),
            in_flight: self.in_flight.len(),
            backoff_entries: self.backoff.len(),
        }
    }

    async fn resolve_msisdn(&self, msisdn: &Msisdn) -> Result<NetworkId, ResolutionError> {
        if let Some(network_id) = self.fresh_entry(msisdn) {
            debug!(msisdn = %msisdn, network_id = %network_id, "Cache HIT");
            return Ok(network_id);
        }

        debug!(msisdn = %msisdn, "Cache MISS");
        self.coalesced_lookup(msisdn).await
    }

    fn fresh_entry(&self, msisdn: &Msisdn) -> Option<NetworkId> {
        let entry = self.entries.get(msisdn)?;
        if entry.is_fresh(self.clock.now(), self.ttl) {
            Some(entry.value.clone())
        } else {
            None
        }
    }

    /// Join the pending lookup for this key, or start one. The check and the
    /// insert happen under the same shard lock; no lock is held while awaiting.
    async fn coalesced_lookup(&self, msisdn: &Msisdn) -> Result<NetworkId, ResolutionError> {
        let pending = match self.in_flight.entry(msisdn.clone()) {
            Entry::Occupied(slot) => {
                debug!(msisdn = %msisdn, "Joining in-flight lookup");
                slot.get().clone()
            }
            Entry::Vacant(slot) => {
                let pending = self.spawn_lookup(msisdn.clone());
                slot.insert(pending.clone());
                pending
            }
        };

        pending.await
    }

    /// The lookup runs on its own task: a caller that stops waiting does not
    /// cancel it for the others. The cache is written before the in-flight
    /// slot is released, and the slot is released on every exit path.
    fn spawn_lookup(&self, msisdn: Msisdn) -> PendingLookup {
        let lookup = Arc::clone(&self.lookup);
        let entries = Arc::clone(&self.entries);
        let clock = Arc::clone(&self.clock);
        let slot = InFlightSlot {
            table: Arc::clone(&self.in_flight),
            key: msisdn.clone(),
        };

        let task = tokio::spawn(async move {
            let outcome = lookup.lookup(&msisdn).await;

            if let Ok(network_id) = &outcome {
                entries.insert(msisdn.clone(), CacheEntry::new(network_id.clone(), clock.now()));
                debug!(msisdn = %msisdn, network_id = %network_id, "Cache entry refreshed");
            }

            drop(slot);
            outcome
        });

        async move {
            task.await.unwrap_or_else(|e| {
                Err(ResolutionError::Internal(format!("lookup task failed: {e}")))
            })
        }
        .boxed()
        .shared()
    }
}

/// Releases the in-flight slot when the lookup task finishes or unwinds.
struct InFlightSlot {
    table: Arc<DashMap<Msisdn, PendingLookup>>,
    key: Msisdn,
}

impl Drop for InFlightSlot {
    fn drop(&mut self) {
        self.table.remove(&self.key);
    }
}

/// Backoff key for input that is not an MSISDN: the trimmed input, cut to
/// [`MAX_INVALID_KEY_CHARS`] characters so junk cannot grow the table's keys.
fn invalid_key_prefix(key: &str) -> &str {
    let key = key.trim();
    match key.char_indices().nth(MAX_INVALID_KEY_CHARS) {
        Some((end, _)) => &key[..end],
        None => key,
    }
}

fn to_chrono(ttl: Duration) -> chrono::Duration {
    chrono::Duration::from_std(ttl).unwrap_or(chrono::Duration::MAX)
}
