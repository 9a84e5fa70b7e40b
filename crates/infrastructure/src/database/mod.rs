use netid_domain::config::DatabaseConfig;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use std::time::Duration;

/// Read-mostly pool over the directory/settings database.
///
/// The schema belongs to the AAA data store; this process only reads it.
pub async fn create_pool(cfg: &DatabaseConfig) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(&cfg.url())?
        .read_only(true)
        // Avoid SQLITE_BUSY errors while the directory is being updated
        .busy_timeout(Duration::from_secs(5));

    SqlitePoolOptions::new()
        .max_connections(cfg.max_connections)
        .min_connections(1)
        .acquire_timeout(Duration::from_secs(5))
        .connect_with(options)
        .await
}
