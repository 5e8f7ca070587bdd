//! PostgreSQL pool setup, migrations and the readiness query

mod config;
mod connector;
mod error;
mod health;

pub use config::PostgresConfig;
pub use connector::{connect, connect_with_retry, run_migrations};
pub use error::{DatabaseError, DatabaseResult};
pub use health::check_health;

pub use sea_orm::{DatabaseConnection, DbErr};
pub use sea_orm_migration::MigratorTrait;
