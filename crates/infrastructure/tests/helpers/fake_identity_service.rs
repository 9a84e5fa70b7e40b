#![allow(dead_code)]

use async_trait::async_trait;
use netid_application::ports::{CredentialStore, NetworkDirectory};
use netid_domain::{Credentials, KnownNetwork, ResolutionError};
use netid_infrastructure::identity::{LookupTransport, TransportResponse};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::RwLock;

pub const BASE_URL: &str = "http://localhost:8500/api/networkid/?msisdn=";

pub fn ok_body(network_id: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<getLocation_Response xmlns="http://pos.mbb-world.com">
    <header>
        <error>0</error>
        <type>none</type>
        <message>ok</message>
        <description/>
    </header>
    <VLR_address>6593340088</VLR_address>
    <MCC_MNC>{network_id}</MCC_MNC>
</getLocation_Response>"#
    )
}

pub const FAILED_BODY: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<getLocation_Response xmlns="http://pos.mbb-world.com">
    <header>
        <error>105</error>
        <type>warning</type>
        <message>VLR Lookup failed</message>
        <description>webconnect returned REJECT</description>
    </header>
</getLocation_Response>"#;

// ============================================================================
// Fake identity service transport
// ============================================================================

/// Answers 401 unless the request carries the accepted secret; otherwise
/// 200 with the configured body (or the forced status, when set).
pub struct FakeIdentityService {
    accepted_secret: Arc<RwLock<String>>,
    body: Arc<RwLock<String>>,
    forced_status: Arc<RwLock<Option<u16>>>,
    delay: Duration,
    calls: Arc<Mutex<Vec<(String, Credentials)>>>,
}

impl FakeIdentityService {
    pub fn new(accepted_secret: &str, body: String) -> Self {
        Self {
            accepted_secret: Arc::new(RwLock::new(accepted_secret.to_string())),
            body: Arc::new(RwLock::new(body)),
            forced_status: Arc::new(RwLock::new(None)),
            delay: Duration::ZERO,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub async fn force_status(&self, status: u16) {
        *self.forced_status.write().await = Some(status);
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn calls(&self) -> Vec<(String, Credentials)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl LookupTransport for FakeIdentityService {
    async fn get(
        &self,
        url: &str,
        credentials: &Credentials,
    ) -> Result<TransportResponse, ResolutionError> {
        self.calls
            .lock()
            .unwrap()
            .push((url.to_string(), credentials.clone()));

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        if let Some(status) = *self.forced_status.read().await {
            return Ok(TransportResponse::new(status, ""));
        }
        if credentials.secret != *self.accepted_secret.read().await {
            return Ok(TransportResponse::new(401, "Unauthorized"));
        }
        Ok(TransportResponse::new(200, self.body.read().await.clone()))
    }
}

// ============================================================================
// Credential store
// ============================================================================

pub struct RotatingCredentialStore {
    current: Arc<RwLock<Credentials>>,
    should_fail: Arc<RwLock<bool>>,
    call_count: Arc<AtomicU64>,
}

impl RotatingCredentialStore {
    pub fn new(username: &str, secret: &str) -> Self {
        Self {
            current: Arc::new(RwLock::new(Credentials::new(username, secret))),
            should_fail: Arc::new(RwLock::new(false)),
            call_count: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn call_count(&self) -> u64 {
        self.call_count.load(Ordering::SeqCst)
    }

    pub async fn set_should_fail(&self, fail: bool) {
        *self.should_fail.write().await = fail;
    }
}

#[async_trait]
impl CredentialStore for RotatingCredentialStore {
    async fn load_credentials(&self) -> Result<Credentials, ResolutionError> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        if *self.should_fail.read().await {
            return Err(ResolutionError::CredentialsUnavailable(
                "settings table locked".to_string(),
            ));
        }
        Ok(self.current.read().await.clone())
    }
}

// ============================================================================
// Network directory
// ============================================================================

pub struct StaticDirectory {
    networks: Vec<KnownNetwork>,
    should_fail: Arc<RwLock<bool>>,
    call_count: Arc<AtomicU64>,
}

impl StaticDirectory {
    pub fn with_networks(ids: &[&str]) -> Self {
        Self {
            networks: ids
                .iter()
                .map(|id| KnownNetwork::new(*id, "Test Mobile", "Testland"))
                .collect(),
            should_fail: Arc::new(RwLock::new(false)),
            call_count: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn call_count(&self) -> u64 {
        self.call_count.load(Ordering::SeqCst)
    }

    pub async fn set_should_fail(&self, fail: bool) {
        *self.should_fail.write().await = fail;
    }
}

#[async_trait]
impl NetworkDirectory for StaticDirectory {
    async fn load_networks(&self) -> Result<Vec<KnownNetwork>, ResolutionError> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        if *self.should_fail.read().await {
            return Err(ResolutionError::DirectoryUnavailable(
                "database is locked".to_string(),
            ));
        }
        Ok(self.networks.clone())
    }
}
