use sea_orm::{ConnectionTrait, DatabaseBackend, DatabaseConnection, Statement};
use std::time::{Duration, Instant};
use tracing::debug;

use super::error::{DatabaseError, DatabaseResult};

/// `SELECT 1` round trip; returns how long the server took to answer
pub async fn check_health(db: &DatabaseConnection) -> DatabaseResult<Duration> {
    let started = Instant::now();
    db.query_one_raw(Statement::from_string(DatabaseBackend::Postgres, "SELECT 1"))
        .await
        .map_err(DatabaseError::Unhealthy)?;

    let latency = started.elapsed();
    debug!(?latency, "PostgreSQL answered health query");
    Ok(latency)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DbErr, MockDatabase, Value};
    use std::collections::BTreeMap;

    #[tokio::test]
    async fn test_check_health_passes_on_answer() {
        let row = BTreeMap::from([("?column?", Value::Int(Some(1)))]);
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![row]])
            .into_connection();

        assert!(check_health(&db).await.is_ok());
    }

    #[tokio::test]
    async fn test_check_health_reports_failure() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom("connection reset".to_owned())])
            .into_connection();

        let err = check_health(&db).await.unwrap_err();
        assert!(matches!(err, DatabaseError::Unhealthy(_)));
        assert!(err.to_string().contains("connection reset"));
    }
}
