#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{DateTime, Duration as ChronoDuration, TimeZone, Utc};
use netid_application::ports::{Clock, IdentityLookup, NetworkDirectory};
use netid_domain::{KnownNetwork, Msisdn, NetworkId, ResolutionError};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::RwLock;

// ============================================================================
// Manual clock
// ============================================================================

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

// ============================================================================
// Counting identity lookup stub
// ============================================================================

pub struct StubLookup {
    result: Arc<RwLock<Result<NetworkId, ResolutionError>>>,
    delay: Duration,
    call_count: Arc<AtomicU64>,
}

impl StubLookup {
    pub fn succeeding(network_id: &str) -> Self {
        Self {
            result: Arc::new(RwLock::new(Ok(NetworkId::new(network_id)))),
            delay: Duration::ZERO,
            call_count: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn failing(error: ResolutionError) -> Self {
        Self {
            result: Arc::new(RwLock::new(Err(error))),
            delay: Duration::ZERO,
            call_count: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn call_count(&self) -> u64 {
        self.call_count.load(Ordering::SeqCst)
    }

    pub async fn set_result(&self, result: Result<NetworkId, ResolutionError>) {
        *self.result.write().await = result;
    }
}

#[async_trait]
impl IdentityLookup for StubLookup {
    async fn lookup(&self, _subscriber: &Msisdn) -> Result<NetworkId, ResolutionError> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        self.result.read().await.clone()
    }
}

// ============================================================================
// In-memory network directory
// ============================================================================

pub struct StaticDirectory {
    networks: Arc<RwLock<Vec<KnownNetwork>>>,
    should_fail: Arc<RwLock<bool>>,
    delay: Duration,
    call_count: Arc<AtomicU64>,
}

impl StaticDirectory {
    pub fn with_networks(ids: &[&str]) -> Self {
        let networks = ids
            .iter()
            .map(|id| KnownNetwork::new(*id, format!("Network {id}"), "Testland"))
            .collect();
        Self {
            networks: Arc::new(RwLock::new(networks)),
            should_fail: Arc::new(RwLock::new(false)),
            delay: Duration::ZERO,
            call_count: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn call_count(&self) -> u64 {
        self.call_count.load(Ordering::SeqCst)
    }

    pub async fn add_network(&self, id: &str) {
        self.networks
            .write()
            .await
            .push(KnownNetwork::new(id, format!("Network {id}"), "Testland"));
    }

    pub async fn set_should_fail(&self, fail: bool) {
        *self.should_fail.write().await = fail;
    }
}

#[async_trait]
impl NetworkDirectory for StaticDirectory {
    async fn load_networks(&self) -> Result<Vec<KnownNetwork>, ResolutionError> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        if *self.should_fail.read().await {
            return Err(ResolutionError::DirectoryUnavailable(
                "connection refused".to_string(),
            ));
        }
        Ok(self.networks.read().await.clone())
    }
}
