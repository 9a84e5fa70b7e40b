#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{DateTime, Duration as ChronoDuration, TimeZone, Utc};
use netid_application::ports::{Clock, IdentityLookup};
use netid_application::services::{BackoffTracker, ResolutionCache};
use netid_domain::{Msisdn, NetworkId, ResolutionError};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

pub struct ManualClock {
    now: Mutex<DateTime<Utc>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            now: Mutex::new(Utc.with_ymd_and_hms(2016, 1, 1, 0, 0, 0).unwrap()),
        }
    }

    pub fn advance_secs(&self, secs: i64) {
        let mut now = self.now.lock().unwrap();
        *now += ChronoDuration::seconds(secs);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap()
    }
}

pub struct FixedLookup {
    network_id: NetworkId,
    call_count: AtomicU64,
}

impl FixedLookup {
    pub fn new(network_id: &str) -> Self {
        Self {
            network_id: NetworkId::new(network_id),
            call_count: AtomicU64::new(0),
        }
    }

    pub fn call_count(&self) -> u64 {
        self.call_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl IdentityLookup for FixedLookup {
    async fn lookup(&self, _subscriber: &Msisdn) -> Result<NetworkId, ResolutionError> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        Ok(self.network_id.clone())
    }
}

pub fn make_cache(
    lookup: Arc<FixedLookup>,
    clock: Arc<ManualClock>,
    ttl_secs: u64,
) -> Arc<ResolutionCache> {
    let backoff = Arc::new(BackoffTracker::new(clock.clone()));
    Arc::new(
        ResolutionCache::new(lookup, backoff, clock).with_ttl(Duration::from_secs(ttl_secs)),
    )
}
