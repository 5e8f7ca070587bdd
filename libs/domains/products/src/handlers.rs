//! Axum routes over [`ProductService`]
//!
//! Mounted by the binary under `/api/products`; paths below are relative to
//! that prefix.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};
use axum_helpers::{
    IdPath, ValidatedJson,
    errors::responses::{ApiInternalError, ApiInvalidId, ApiNotFound, ApiValidationFailed},
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::ProductResult;
use crate::models::{Product, ProductInput};
use crate::repository::ProductRepository;
use crate::service::ProductService;

type Shared<R> = State<Arc<ProductService<R>>>;

#[derive(OpenApi)]
#[openapi(
    paths(
        list_products,
        list_categories,
        list_products_by_category,
        get_product,
        create_product,
        update_product,
        delete_product,
    ),
    components(
        schemas(Product, ProductInput),
        responses(ApiNotFound, ApiValidationFailed, ApiInvalidId, ApiInternalError)
    ),
    tags((name = "Products", description = "Catalog reads and writes"))
)]
pub struct ApiDoc;

/// Catalog routes backed by `service`
pub fn router<R: ProductRepository + 'static>(service: ProductService<R>) -> Router {
    let by_id = get(get_product).put(update_product).delete(delete_product);

    Router::new()
        .route("/", get(list_products).post(create_product))
        .route("/categories", get(list_categories))
        .route("/categories/{category}", get(list_products_by_category))
        .route("/{id}", by_id)
        .with_state(Arc::new(service))
}

/// Every product, ordered by id
#[utoipa::path(
    get,
    path = "",
    tag = "Products",
    responses(
        (status = 200, description = "Full catalog", body = Vec<Product>),
        (status = 500, response = ApiInternalError)
    )
)]
async fn list_products<R: ProductRepository>(
    State(service): Shared<R>,
) -> ProductResult<Json<Vec<Product>>> {
    service.get_all_products().await.map(Json)
}

/// Distinct category labels, ascending
#[utoipa::path(
    get,
    path = "/categories",
    tag = "Products",
    responses(
        (status = 200, description = "Category labels", body = Vec<String>),
        (status = 500, response = ApiInternalError)
    )
)]
async fn list_categories<R: ProductRepository>(
    State(service): Shared<R>,
) -> ProductResult<Json<Vec<String>>> {
    service.get_all_categories().await.map(Json)
}

/// Products whose category equals the path segment exactly
#[utoipa::path(
    get,
    path = "/categories/{category}",
    tag = "Products",
    params(("category" = String, Path, description = "Category label, case-sensitive")),
    responses(
        (status = 200, description = "Matching products, empty when none", body = Vec<Product>),
        (status = 500, response = ApiInternalError)
    )
)]
async fn list_products_by_category<R: ProductRepository>(
    State(service): Shared<R>,
    Path(category): Path<String>,
) -> ProductResult<Json<Vec<Product>>> {
    service.get_products_by_category(&category).await.map(Json)
}

#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Products",
    params(("id" = i32, Path, description = "Product id")),
    responses(
        (status = 200, description = "The product", body = Product),
        (status = 400, response = ApiInvalidId),
        (status = 404, response = ApiNotFound),
        (status = 500, response = ApiInternalError)
    )
)]
async fn get_product<R: ProductRepository>(
    State(service): Shared<R>,
    IdPath(id): IdPath,
) -> ProductResult<Json<Product>> {
    service.get_product_by_id(id).await.map(Json)
}

/// Store a new product; the server assigns its id
#[utoipa::path(
    post,
    path = "",
    tag = "Products",
    request_body = ProductInput,
    responses(
        (status = 201, description = "Stored product with its new id", body = Product),
        (status = 400, response = ApiValidationFailed),
        (status = 500, response = ApiInternalError)
    )
)]
async fn create_product<R: ProductRepository>(
    State(service): Shared<R>,
    ValidatedJson(input): ValidatedJson<ProductInput>,
) -> ProductResult<(StatusCode, Json<Product>)> {
    let created = service.add_product(input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Overwrite every field of an existing product
#[utoipa::path(
    put,
    path = "/{id}",
    tag = "Products",
    params(("id" = i32, Path, description = "Product id")),
    request_body = ProductInput,
    responses(
        (status = 200, description = "Product after the update", body = Product),
        (status = 400, response = ApiValidationFailed),
        (status = 404, response = ApiNotFound),
        (status = 500, response = ApiInternalError)
    )
)]
async fn update_product<R: ProductRepository>(
    State(service): Shared<R>,
    IdPath(id): IdPath,
    ValidatedJson(input): ValidatedJson<ProductInput>,
) -> ProductResult<Json<Product>> {
    service.update_product(id, input).await.map(Json)
}

#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Products",
    params(("id" = i32, Path, description = "Product id")),
    responses(
        (status = 204, description = "Removed"),
        (status = 400, response = ApiInvalidId),
        (status = 404, response = ApiNotFound),
        (status = 500, response = ApiInternalError)
    )
)]
async fn delete_product<R: ProductRepository>(
    State(service): Shared<R>,
    IdPath(id): IdPath,
) -> ProductResult<StatusCode> {
    service.delete_product(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
