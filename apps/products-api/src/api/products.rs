use axum::Router;
use domain_products::{PgProductRepository, ProductService, handlers};

use crate::state::AppState;

/// Catalog routes over the shared PostgreSQL pool
pub fn router(state: &AppState) -> Router {
    handlers::router(ProductService::new(PgProductRepository::new(
        state.db.clone(),
    )))
}
