use utoipa::OpenApi;

/// Document served at `/api-docs/openapi.json`; product paths come from the
/// domain crate, prefixed with their mount point.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Product Catalog",
        version = "0.1.0",
        description = "Browse the catalog by category and manage its products",
        license(name = "MIT")
    ),
    servers((url = "http://localhost:8080", description = "Local run")),
    nest((path = "/api/products", api = domain_products::ApiDoc))
)]
pub struct ApiDoc;
