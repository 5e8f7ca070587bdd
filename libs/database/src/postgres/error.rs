use sea_orm::DbErr;
use thiserror::Error;

/// Failures at the points where the service touches PostgreSQL outside a
/// repository call
#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("Could not connect to PostgreSQL: {0}")]
    Connect(#[source] DbErr),

    #[error("Migrations for {app} failed: {source}")]
    Migration {
        app: String,
        #[source]
        source: DbErr,
    },

    #[error("PostgreSQL did not answer the health query: {0}")]
    Unhealthy(#[source] DbErr),
}

pub type DatabaseResult<T> = Result<T, DatabaseError>;
