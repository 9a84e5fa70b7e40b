use async_trait::async_trait;
use netid_application::ports::NetworkDirectory;
use netid_domain::{KnownNetwork, ResolutionError};
use sqlx::SqlitePool;
use tracing::{error, instrument};

type NetworkRow = (i64, Option<String>, Option<String>);

/// Reads the operator-maintained `networks` table.
pub struct SqliteNetworkDirectory {
    pool: SqlitePool,
}

impl SqliteNetworkDirectory {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn row_to_network(row: NetworkRow) -> KnownNetwork {
        let (mccmnc, provider_name, country_name) = row;

        KnownNetwork::new(
            mccmnc.to_string(),
            provider_name.unwrap_or_default(),
            country_name.unwrap_or_default(),
        )
    }
}

#[async_trait]
impl NetworkDirectory for SqliteNetworkDirectory {
    #[instrument(skip(self))]
    async fn load_networks(&self) -> Result<Vec<KnownNetwork>, ResolutionError> {
        let rows = sqlx::query_as::<_, NetworkRow>(
            "SELECT mccmnc, providername, countryname FROM networks",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to load networks");
            ResolutionError::DirectoryUnavailable(e.to_string())
        })?;

        Ok(rows.into_iter().map(Self::row_to_network).collect())
    }
}
