use async_trait::async_trait;
use netid_application::ports::CredentialStore;
use netid_domain::config::CredentialsConfig;
use netid_domain::{Credentials, ResolutionError};
use sqlx::SqlitePool;
use tracing::{error, instrument};

/// Reads the identity service credentials from the `settings` key-value table.
///
/// Every call goes to the database so a rotated password is picked up on the
/// next refresh.
pub struct SqliteCredentialStore {
    pool: SqlitePool,
    keys: CredentialsConfig,
}

impl SqliteCredentialStore {
    pub fn new(pool: SqlitePool, keys: CredentialsConfig) -> Self {
        Self { pool, keys }
    }

    async fn setting(&self, name: &str) -> Result<String, ResolutionError> {
        let value = sqlx::query_scalar::<_, String>("SELECT value FROM settings WHERE name = ?")
            .bind(name)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                error!(error = %e, setting = name, "Failed to read setting");
                ResolutionError::CredentialsUnavailable(e.to_string())
            })?;

        value.ok_or_else(|| {
            ResolutionError::CredentialsUnavailable(format!("setting '{name}' is missing"))
        })
    }
}

#[async_trait]
impl CredentialStore for SqliteCredentialStore {
    #[instrument(skip(self))]
    async fn load_credentials(&self) -> Result<Credentials, ResolutionError> {
        let username = self.setting(&self.keys.username_key).await?;
        let secret = self.setting(&self.keys.secret_key).await?;

        Ok(Credentials::new(username, secret))
    }
}
