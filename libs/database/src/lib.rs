//! PostgreSQL startup plumbing for the catalog service
//!
//! Feature `postgres` (default) brings the SeaORM pool, migration runner and
//! health query; `config` adds [`core_config::FromEnv`] for `PostgresConfig`.
//! [`common`] holds the backoff helper used while the database comes up.
//!
//! ```ignore
//! let db = database::postgres::connect_with_retry(config, None).await?;
//! database::postgres::run_migrations::<migration::Migrator>(&db, "products_api").await?;
//! ```

pub mod common;

#[cfg(feature = "postgres")]
pub mod postgres;

#[cfg(feature = "postgres")]
pub use postgres::{DatabaseError, DatabaseResult};
