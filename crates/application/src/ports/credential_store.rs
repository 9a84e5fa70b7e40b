use async_trait::async_trait;
use netid_domain::{Credentials, ResolutionError};

/// Key-value settings store holding the identity service credentials.
///
/// Each call must reflect the latest rotation.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    async fn load_credentials(&self) -> Result<Credentials, ResolutionError>;
}
