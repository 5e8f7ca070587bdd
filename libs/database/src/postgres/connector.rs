use sea_orm::{Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;
use tracing::info;

use super::error::{DatabaseError, DatabaseResult};
use super::PostgresConfig;
use crate::common::{RetryConfig, retry_with_backoff};

/// Open a pool with `config`'s settings, failing on the first error
pub async fn connect(config: PostgresConfig) -> DatabaseResult<DatabaseConnection> {
    let max_connections = config.max_connections;
    let db = Database::connect(config.into_connect_options())
        .await
        .map_err(DatabaseError::Connect)?;
    info!(max_connections, "PostgreSQL pool open");
    Ok(db)
}

/// [`connect`], retried with backoff while the server is still coming up.
/// `None` means [`RetryConfig::default`].
///
/// ```ignore
/// let retry = RetryConfig::new().with_max_retries(5);
/// let db = connect_with_retry(PostgresConfig::from_env()?, Some(retry)).await?;
/// ```
pub async fn connect_with_retry(
    config: PostgresConfig,
    retry: Option<RetryConfig>,
) -> DatabaseResult<DatabaseConnection> {
    retry_with_backoff(|| connect(config.clone()), retry.unwrap_or_default()).await
}

/// Bring the schema up to date with every migration `M` knows.
/// `app` only labels the log lines and the error.
pub async fn run_migrations<M: MigratorTrait>(
    db: &DatabaseConnection,
    app: &str,
) -> DatabaseResult<()> {
    info!(app, "Applying pending migrations");
    M::up(db, None)
        .await
        .map_err(|source| DatabaseError::Migration {
            app: app.to_string(),
            source,
        })?;
    info!(app, "Schema up to date");
    Ok(())
}
