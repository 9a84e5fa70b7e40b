use async_trait::async_trait;
use netid_domain::{Msisdn, NetworkId, ResolutionError};

/// One outbound MSISDN → network id resolution, without any caching.
#[async_trait]
pub trait IdentityLookup: Send + Sync {
    async fn lookup(&self, subscriber: &Msisdn) -> Result<NetworkId, ResolutionError>;
}
