//! `ToResponse` components describing the [`ErrorResponse`] bodies handlers
//! can return, for use in `#[utoipa::path(responses(...))]`.

use super::ErrorResponse;
#[allow(unused_imports)]
use serde_json::json;
use utoipa::ToResponse;

/// 500, detail withheld from the client
#[derive(ToResponse)]
#[response(
    description = "Unexpected server failure",
    content_type = "application/json",
    example = json!({
        "code": 1005,
        "error": "INTERNAL_ERROR",
        "message": "An internal server error occurred"
    })
)]
pub struct ApiInternalError(pub ErrorResponse);

/// 400 from a body that failed validation or could not be read as JSON
#[derive(ToResponse)]
#[response(
    description = "Request body rejected",
    content_type = "application/json",
    example = json!({
        "code": 1001,
        "error": "VALIDATION_ERROR",
        "message": "Request validation failed",
        "details": {
            "price": [{
                "code": "range",
                "message": null,
                "params": {"min": 0.0, "value": -1.0}
            }]
        }
    })
)]
pub struct ApiValidationFailed(pub ErrorResponse);

/// 400 from a path id that is not an integer
#[derive(ToResponse)]
#[response(
    description = "Path id is not an integer",
    content_type = "application/json",
    example = json!({
        "code": 1002,
        "error": "INVALID_ID",
        "message": "Invalid id: abc"
    })
)]
pub struct ApiInvalidId(pub ErrorResponse);

/// 404
#[derive(ToResponse)]
#[response(
    description = "No record with that id",
    content_type = "application/json",
    example = json!({
        "code": 1004,
        "error": "NOT_FOUND",
        "message": "Product 42 not found"
    })
)]
pub struct ApiNotFound(pub ErrorResponse);
