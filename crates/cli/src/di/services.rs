use super::Repositories;
use netid_application::ports::Clock;
use netid_application::services::{BackoffTracker, NetworkRegistry, ResolutionCache};
use netid_domain::Config;
use netid_infrastructure::identity::{HttpTransport, IdentityServiceClient};
use netid_infrastructure::system::SystemClock;
use std::sync::Arc;
use tracing::warn;

pub struct ResolverServices {
    pub registry: Arc<NetworkRegistry>,
    pub cache: Arc<ResolutionCache>,
}

impl ResolverServices {
    pub async fn new(config: &Config, repos: &Repositories) -> Self {
        let clock: Arc<dyn Clock> = Arc::new(SystemClock);

        let registry = Arc::new(NetworkRegistry::new(repos.network_directory.clone()));
        if let Err(e) = registry.refresh().await {
            warn!(error = %e, "Starting with an empty network registry, will reload on first lookup");
        }

        let transport = Arc::new(HttpTransport::new(
            config.upstream.timeout(),
            &config.upstream.user_agent,
        ));
        let client = IdentityServiceClient::new(
            config.upstream.base_url.clone(),
            transport,
            repos.credential_store.clone(),
            registry.clone(),
        )
        .with_timeout(config.upstream.timeout());

        let backoff = Arc::new(BackoffTracker::new(clock.clone()));
        let cache = Arc::new(
            ResolutionCache::new(Arc::new(client), backoff, clock).with_ttl(config.cache.ttl()),
        );

        Self { registry, cache }
    }
}
