use netid_domain::config::DatabaseConfig;
use netid_infrastructure::database::create_pool;
use sqlx::SqlitePool;
use tracing::{error, info};

pub async fn init_database(cfg: &DatabaseConfig) -> anyhow::Result<SqlitePool> {
    info!("Opening database: {}", cfg.path);

    let pool = create_pool(cfg).await.map_err(|e| {
        error!("Failed to open database {}: {}", cfg.path, e);
        anyhow::anyhow!(e)
    })?;

    info!(
        "Database opened read-only (max_connections={})",
        cfg.max_connections
    );

    Ok(pool)
}
