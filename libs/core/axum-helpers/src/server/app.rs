use super::shutdown::ShutdownCoordinator;
use crate::errors::handlers::not_found;
use crate::http::security_headers;
use axum::http::{HeaderValue, Method, header};
use axum::{Router, middleware};
use core_config::server::ServerConfig;
use std::future::Future;
use std::io;
use std::time::Duration;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{Level, info, warn};
use utoipa::OpenApi;
use utoipa_rapidoc::RapiDoc;
use utoipa_redoc::{Redoc, Servable as _};
use utoipa_scalar::{Scalar, Servable as _};
use utoipa_swagger_ui::SwaggerUi;

/// Environment variable holding comma-separated allowed CORS origins
pub const CORS_ALLOWED_ORIGIN: &str = "CORS_ALLOWED_ORIGIN";

const OPENAPI_JSON: &str = "/api-docs/openapi.json";

fn invalid_input(message: String) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidInput, message)
}

/// Parse a comma-separated origin list; blank entries are skipped but at
/// least one origin is required.
pub fn parse_allowed_origins(origins: &str) -> io::Result<Vec<HeaderValue>> {
    let parsed = origins
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(HeaderValue::from_str)
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| invalid_input(format!("Invalid {}: {}", CORS_ALLOWED_ORIGIN, e)))?;

    if parsed.is_empty() {
        return Err(invalid_input(format!("{} cannot be empty", CORS_ALLOWED_ORIGIN)));
    }
    Ok(parsed)
}

fn cors_from_env() -> io::Result<CorsLayer> {
    let origins = std::env::var(CORS_ALLOWED_ORIGIN).map_err(|_| {
        invalid_input(format!(
            "{0} is required, e.g. {0}=http://localhost:3000",
            CORS_ALLOWED_ORIGIN
        ))
    })?;
    let allowed = parse_allowed_origins(&origins)?;
    info!(origins = %origins, "CORS configured");

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .max_age(Duration::from_secs(3600)))
}

/// Swagger UI, ReDoc, RapiDoc and Scalar over the same document
fn docs_router<T: OpenApi>() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url(OPENAPI_JSON, T::openapi()))
        .merge(Redoc::with_url("/redoc", T::openapi()))
        .merge(RapiDoc::new(OPENAPI_JSON).path("/rapidoc"))
        .merge(Scalar::with_url("/scalar", T::openapi()))
}

/// Assemble the public router: `apis` under `/api`, documentation UIs, a JSON
/// 404 fallback, request tracing, security headers, CORS and compression.
///
/// `/health` and `/ready` are merged by the binary afterwards.
///
/// # Errors
/// Fails when `CORS_ALLOWED_ORIGIN` is unset, blank or not a valid header value.
pub async fn create_router<T>(apis: Router) -> io::Result<Router>
where
    T: OpenApi + 'static,
{
    let cors = cors_from_env()?;

    Ok(docs_router::<T>()
        .nest("/api", apis)
        .fallback(not_found)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(middleware::from_fn(security_headers))
        .layer(cors)
        .layer(CompressionLayer::new()))
}

/// Serve `router` until SIGINT/SIGTERM, drain in-flight requests, then run
/// `cleanup` (closing the database pool) bounded by `shutdown_timeout`.
///
/// ```ignore
/// let db = state.db.clone();
/// create_production_app(app, &config.server, Duration::from_secs(30), async move {
///     db.close().await.ok();
/// })
/// .await?;
/// ```
pub async fn create_production_app<F>(
    router: Router,
    server_config: &ServerConfig,
    shutdown_timeout: Duration,
    cleanup: F,
) -> io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let (coordinator, mut shutdown_rx) = ShutdownCoordinator::new();

    let listener = tokio::net::TcpListener::bind(server_config.address()).await?;
    info!("Listening on {}", listener.local_addr()?);

    let cleanup_task = tokio::spawn(async move {
        // Err means the coordinator was dropped without a signal
        if shutdown_rx.recv().await.is_err() {
            return;
        }
        match tokio::time::timeout(shutdown_timeout, cleanup).await {
            Ok(()) => info!("Cleanup completed"),
            Err(_) => warn!(timeout = ?shutdown_timeout, "Cleanup timed out, forcing shutdown"),
        }
    });

    let served = axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(coordinator.until_signal())
        .await;
    if let Err(e) = &served {
        tracing::error!("Server error: {:?}", e);
    }

    let _ = cleanup_task.await;
    served
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origins_are_trimmed_and_blank_entries_skipped() {
        let origins =
            parse_allowed_origins("http://localhost:3000, https://shop.example.com ,").unwrap();
        assert_eq!(
            origins,
            vec![
                HeaderValue::from_static("http://localhost:3000"),
                HeaderValue::from_static("https://shop.example.com"),
            ]
        );
    }

    #[test]
    fn test_origins_reject_blank_and_invalid_values() {
        assert!(parse_allowed_origins(" , ").is_err());
        assert!(parse_allowed_origins("http://bad\norigin").is_err());
    }

    #[test]
    fn test_cors_requires_configured_origins() {
        temp_env::with_var_unset(CORS_ALLOWED_ORIGIN, || {
            let err = cors_from_env().unwrap_err();
            assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
            assert!(err.to_string().contains(CORS_ALLOWED_ORIGIN));
        });
        temp_env::with_var(CORS_ALLOWED_ORIGIN, Some("http://localhost:5173"), || {
            assert!(cors_from_env().is_ok());
        });
    }
}
