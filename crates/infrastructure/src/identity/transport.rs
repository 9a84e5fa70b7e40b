use async_trait::async_trait;
use netid_domain::{Credentials, ResolutionError};
use std::time::Duration;
use tracing::debug;

/// Status and body of one identity service response.
#[derive(Debug, Clone)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

impl TransportResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status == 401
    }
}

/// Authenticated GET against the identity service.
///
/// Any HTTP status is a successful transport result; only a failure to get a
/// response at all is an error.
#[async_trait]
pub trait LookupTransport: Send + Sync {
    async fn get(
        &self,
        url: &str,
        credentials: &Credentials,
    ) -> Result<TransportResponse, ResolutionError>;
}

/// reqwest-backed transport with connection pooling and basic auth.
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new(timeout: Duration, user_agent: &str) -> Self {
        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .timeout(timeout)
            .user_agent(user_agent)
            .pool_max_idle_per_host(4)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self { client }
    }
}

#[async_trait]
impl LookupTransport for HttpTransport {
    async fn get(
        &self,
        url: &str,
        credentials: &Credentials,
    ) -> Result<TransportResponse, ResolutionError> {
        debug!(url, "Sending identity lookup");

        let response = self
            .client
            .get(url)
            .basic_auth(&credentials.username, Some(&credentials.secret))
            .send()
            .await
            .map_err(|e| {
                ResolutionError::UpstreamUnavailable(format!("request to {url} failed: {e}"))
            })?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| {
            ResolutionError::UpstreamUnavailable(format!(
                "failed to read response from {url}: {e}"
            ))
        })?;

        debug!(url, status, body_len = body.len(), "Identity response received");

        Ok(TransportResponse { status, body })
    }
}
