use super::document::IdentityDocument;
use super::transport::{LookupTransport, TransportResponse};
use async_trait::async_trait;
use netid_application::ports::{CredentialStore, IdentityLookup};
use netid_application::services::NetworkRegistry;
use netid_domain::{Credentials, Msisdn, NetworkId, ResolutionError};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::{debug, error, info, warn};

/// Client for the upstream MSISDN → MCC/MNC identity service.
///
/// Holds the API credentials behind a lock. On HTTP 401 the credentials are
/// reloaded from the settings store once and the request is retried exactly
/// once with the reloaded value; a second 401 is `AuthenticationFailed`.
/// The returned network id must be known to the [`NetworkRegistry`].
pub struct IdentityServiceClient {
    base_url: String,
    timeout: Duration,
    transport: Arc<dyn LookupTransport>,
    credential_store: Arc<dyn CredentialStore>,
    credentials: RwLock<Option<Credentials>>,
    registry: Arc<NetworkRegistry>,
}

impl IdentityServiceClient {
    pub fn new(
        base_url: impl Into<String>,
        transport: Arc<dyn LookupTransport>,
        credential_store: Arc<dyn CredentialStore>,
        registry: Arc<NetworkRegistry>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: Duration::from_secs(10),
            transport,
            credential_store,
            credentials: RwLock::new(None),
            registry,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Start with known credentials instead of loading them on first use.
    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = RwLock::new(Some(credentials));
        self
    }

    fn lookup_url(&self, subscriber: &Msisdn) -> String {
        format!("{}{}", self.base_url, subscriber)
    }

    async fn current_credentials(&self) -> Result<Credentials, ResolutionError> {
        if let Some(credentials) = self.credentials.read().await.as_ref() {
            return Ok(credentials.clone());
        }

        let mut guard = self.credentials.write().await;
        if let Some(credentials) = guard.as_ref() {
            return Ok(credentials.clone());
        }

        let loaded = self.load_credentials().await?;
        *guard = Some(loaded.clone());
        Ok(loaded)
    }

    /// Replace `rejected` with the store's current credentials.
    ///
    /// The write lock is held for the whole reload, so no lookup reads a
    /// half-rotated value. If another lookup already replaced `rejected`, its
    /// result is reused instead of reading the store again.
    async fn refresh_credentials(
        &self,
        rejected: &Credentials,
    ) -> Result<Credentials, ResolutionError> {
        let mut guard = self.credentials.write().await;

        if let Some(current) = guard.as_ref() {
            if current != rejected {
                debug!("Credentials already refreshed by a concurrent lookup");
                return Ok(current.clone());
            }
        }

        let refreshed = self.load_credentials().await?;
        *guard = Some(refreshed.clone());
        info!(username = %refreshed.username, "Identity service credentials refreshed");
        Ok(refreshed)
    }

    async fn load_credentials(&self) -> Result<Credentials, ResolutionError> {
        self.credential_store.load_credentials().await.map_err(|e| {
            error!(error = %e, "Unable to load identity service credentials");
            match e {
                ResolutionError::CredentialsUnavailable(_) => e,
                other => ResolutionError::CredentialsUnavailable(other.to_string()),
            }
        })
    }

    async fn fetch(
        &self,
        url: &str,
        credentials: &Credentials,
    ) -> Result<TransportResponse, ResolutionError> {
        tokio::time::timeout(self.timeout, self.transport.get(url, credentials))
            .await
            .map_err(|_| {
                ResolutionError::UpstreamUnavailable(format!(
                    "timeout after {}ms waiting for {}",
                    self.timeout.as_millis(),
                    url
                ))
            })?
    }
}

#[async_trait]
impl IdentityLookup for IdentityServiceClient {
    async fn lookup(&self, subscriber: &Msisdn) -> Result<NetworkId, ResolutionError> {
        let url = self.lookup_url(subscriber);
        let credentials = self.current_credentials().await?;

        let mut response = self.fetch(&url, &credentials).await?;

        if response.is_unauthorized() {
            warn!(msisdn = %subscriber, "Got 401, refreshing API credentials and retrying");
            let refreshed = self.refresh_credentials(&credentials).await?;
            response = self.fetch(&url, &refreshed).await?;

            if response.is_unauthorized() {
                error!(msisdn = %subscriber, "Identity service rejected refreshed credentials");
                return Err(ResolutionError::AuthenticationFailed);
            }
        }

        if !response.is_success() {
            return Err(ResolutionError::UpstreamUnavailable(format!(
                "identity service returned HTTP {}",
                response.status
            )));
        }

        let document = IdentityDocument::parse(&response.body).map_err(|e| {
            error!(msisdn = %subscriber, error = %e, body = %response.body, "Identity lookup failed");
            e
        })?;

        if !self.registry.is_known(document.network_id.as_str()).await? {
            error!(
                msisdn = %subscriber,
                network_id = %document.network_id,
                vlr_address = document.vlr_address.as_deref().unwrap_or("-"),
                "Identity service returned an unknown network id"
            );
            return Err(ResolutionError::UnknownIdentifier(
                document.network_id.to_string(),
            ));
        }

        debug!(msisdn = %subscriber, network_id = %document.network_id, "Identity resolved");
        Ok(document.network_id)
    }
}
