use async_trait::async_trait;
use netid_domain::{KnownNetwork, ResolutionError};

/// Operator-maintained list of known networks. Read wholesale; no filtering.
#[async_trait]
pub trait NetworkDirectory: Send + Sync {
    async fn load_networks(&self) -> Result<Vec<KnownNetwork>, ResolutionError>;
}
