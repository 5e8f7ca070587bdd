//! Product catalog HTTP server
//!
//! Connects to PostgreSQL (with retries), optionally applies migrations, then
//! serves `/api/products`, the documentation UIs, `/health` and `/ready`.

use axum::Router;
use axum_helpers::server::{create_production_app, health_router};
use core_config::FromEnv;
use core_config::tracing::{init_tracing, install_color_eyre};
use database::common::RetryConfig;
use eyre::WrapErr;
use migration::Migrator;
use sea_orm::DatabaseConnection;
use std::time::Duration;
use tracing::info;

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

const SHUTDOWN_BUDGET: Duration = Duration::from_secs(30);

async fn open_database(config: &Config) -> eyre::Result<DatabaseConnection> {
    let retry = RetryConfig::new()
        .with_max_retries(5)
        .with_initial_delay(Duration::from_millis(500));
    let db = database::postgres::connect_with_retry(config.database.clone(), Some(retry))
        .await
        .wrap_err("PostgreSQL unreachable")?;

    if config.run_migrations {
        database::postgres::run_migrations::<Migrator>(&db, config.app.name).await?;
    } else {
        info!("RUN_MIGRATIONS not set, leaving schema untouched");
    }
    Ok(db)
}

async fn app(state: &AppState) -> eyre::Result<Router> {
    let public = axum_helpers::create_router::<openapi::ApiDoc>(api::routes(state)).await?;

    Ok(public
        .merge(health_router(state.config.app))
        .merge(api::ready_router(state.clone())))
}

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);
    info!(
        app = config.app.name,
        version = config.app.version,
        environment = ?config.environment,
        "Booting"
    );

    let db = open_database(&config).await?;
    let state = AppState { config, db };
    let router = app(&state).await?;

    let pool = state.db.clone();
    create_production_app(router, &state.config.server, SHUTDOWN_BUDGET, async move {
        info!("Closing PostgreSQL pool");
        if let Err(e) = pool.close().await {
            tracing::error!(error = %e, "PostgreSQL pool did not close cleanly");
        }
    })
    .await
    .wrap_err("HTTP server stopped with an error")?;

    info!("Stopped");
    Ok(())
}
