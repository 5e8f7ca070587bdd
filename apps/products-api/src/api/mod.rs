pub mod health;
pub mod products;

use axum::{Router, routing::get};

use crate::state::AppState;

/// Versionless API surface, nested under `/api` by `create_router`
pub fn routes(state: &AppState) -> Router {
    Router::new().nest("/products", products::router(state))
}

/// `/ready`, merged at the root beside `/health`
pub fn ready_router(state: AppState) -> Router {
    Router::new()
        .route("/ready", get(health::ready_handler))
        .with_state(state)
}
