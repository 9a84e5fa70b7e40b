use crate::ports::NetworkDirectory;
use arc_swap::ArcSwap;
use netid_domain::{KnownNetwork, ResolutionError};
use rustc_hash::FxHashMap;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, error, info, instrument};

type Snapshot = FxHashMap<Arc<str>, KnownNetwork>;

/// Read-through cache of the known network ids.
///
/// There is no TTL: the directory changes rarely, so the snapshot is only
/// reloaded when a lookup names an id it does not contain (or on an explicit
/// `refresh`). The snapshot is swapped atomically, readers never block.
pub struct NetworkRegistry {
    directory: Arc<dyn NetworkDirectory>,
    snapshot: ArcSwap<Snapshot>,
    /// Serializes reloads. Misses that queued behind a reload reuse its snapshot.
    refresh_lock: Mutex<()>,
}

impl NetworkRegistry {
    /// Empty registry; the first miss (or an explicit `refresh`) loads it.
    pub fn new(directory: Arc<dyn NetworkDirectory>) -> Self {
        Self {
            directory,
            snapshot: ArcSwap::from_pointee(Snapshot::default()),
            refresh_lock: Mutex::new(()),
        }
    }

    /// Known in the current snapshot, or after one reload of the directory.
    pub async fn is_known(&self, network_id: &str) -> Result<bool, ResolutionError> {
        let seen = self.snapshot.load_full();
        if seen.contains_key(network_id) {
            return Ok(true);
        }

        let _guard = self.refresh_lock.lock().await;

        if Arc::ptr_eq(&seen, &self.snapshot.load_full()) {
            debug!(network_id, "Network id not in snapshot, reloading directory");
            self.reload().await?;
        } else {
            debug!(network_id, "Snapshot replaced while waiting, skipping reload");
        }

        Ok(self.snapshot.load().contains_key(network_id))
    }

    /// Reload the full directory. On failure the previous snapshot is kept.
    #[instrument(skip(self))]
    pub async fn refresh(&self) -> Result<usize, ResolutionError> {
        let _guard = self.refresh_lock.lock().await;
        self.reload().await
    }

    /// Caller holds `refresh_lock`.
    async fn reload(&self) -> Result<usize, ResolutionError> {
        let networks = self.directory.load_networks().await.map_err(|e| {
            error!(error = %e, "Network directory reload failed, keeping previous snapshot");
            match e {
                ResolutionError::DirectoryUnavailable(_) => e,
                other => ResolutionError::DirectoryUnavailable(other.to_string()),
            }
        })?;

        let snapshot: Snapshot = networks
            .into_iter()
            .map(|network| (network.id.as_arc(), network))
            .collect();
        let count = snapshot.len();

        self.snapshot.store(Arc::new(snapshot));
        info!(networks = count, "Network directory loaded");

        Ok(count)
    }

    pub fn get(&self, network_id: &str) -> Option<KnownNetwork> {
        self.snapshot.load().get(network_id).cloned()
    }

    pub fn len(&self) -> usize {
        self.snapshot.load().len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshot.load().is_empty()
    }
}
