//! # Axum Helpers
//!
//! Shared building blocks for the catalog's Axum services.
//!
//! - [`server`]: router assembly with OpenAPI UIs, `/health`, readiness
//!   aggregation, graceful shutdown
//! - [`http`]: response middleware
//! - [`errors`]: `AppError` and the JSON error body every endpoint returns
//! - [`extractors`]: integer id paths and validated JSON bodies

pub mod errors;
pub mod extractors;
pub mod http;
pub mod server;

// Re-export server types
pub use server::{
    HealthCheckFuture, HealthResponse, create_production_app, create_router, health_router,
    run_health_checks,
};

// Re-export HTTP middleware
pub use http::security_headers;

// Re-export error types
pub use errors::{AppError, ErrorCode, ErrorResponse};

// Re-export extractors
pub use extractors::{IdPath, ValidatedJson};
