use netid_domain::Config;
use netid_infrastructure::repositories::{SqliteCredentialStore, SqliteNetworkDirectory};
use sqlx::SqlitePool;
use std::sync::Arc;

pub struct Repositories {
    pub network_directory: Arc<SqliteNetworkDirectory>,
    pub credential_store: Arc<SqliteCredentialStore>,
}

impl Repositories {
    pub fn new(pool: SqlitePool, config: &Config) -> Self {
        Self {
            network_directory: Arc::new(SqliteNetworkDirectory::new(pool.clone())),
            credential_store: Arc::new(SqliteCredentialStore::new(
                pool,
                config.credentials.clone(),
            )),
        }
    }
}
