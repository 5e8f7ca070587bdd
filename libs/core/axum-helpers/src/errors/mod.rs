pub mod codes;
pub mod handlers;
pub mod responses;

pub use codes::ErrorCode;

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{error, info, warn};
use utoipa::ToSchema;
use validator::ValidationErrors;

/// JSON body of every error response
///
/// ```json
/// { "code": 1004, "error": "NOT_FOUND", "message": "Product 7 not found" }
/// ```
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Numeric [`ErrorCode`]
    pub code: i32,
    /// [`ErrorCode`] identifier
    pub error: String,
    pub message: String,
    /// Field-level validation errors
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

/// Errors a handler can return; each renders as an [`ErrorResponse`]
#[derive(Debug, Error)]
pub enum AppError {
    #[error("JSON extraction error: {0}")]
    JsonExtractorRejection(#[from] JsonRejection),

    #[error("Validation error: {0}")]
    ValidationError(#[from] ValidationErrors),

    #[error("Invalid id: {0}")]
    InvalidId(String),

    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Not Found: {0}")]
    NotFound(String),

    /// The message is logged, never sent to the client
    #[error("Internal Server Error: {0}")]
    InternalServerError(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::JsonExtractorRejection(rejection) => rejection.status(),
            AppError::ValidationError(_) | AppError::InvalidId(_) | AppError::BadRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn error_code(&self) -> ErrorCode {
        match self {
            AppError::JsonExtractorRejection(_) => ErrorCode::JsonExtraction,
            AppError::ValidationError(_) => ErrorCode::ValidationError,
            AppError::InvalidId(_) => ErrorCode::InvalidId,
            AppError::BadRequest(_) => ErrorCode::BadRequest,
            AppError::NotFound(_) => ErrorCode::NotFound,
            AppError::InternalServerError(_) => ErrorCode::InternalError,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let code = self.error_code();
        let error_code = code.code();

        let (message, details) = match self {
            AppError::JsonExtractorRejection(rejection) => {
                warn!(error_code, "Rejected request body: {}", rejection);
                (rejection.body_text(), None)
            }
            AppError::ValidationError(errors) => {
                info!(error_code, "Validation failed: {}", errors);
                let details = serde_json::to_value(&errors).ok();
                (code.default_message().to_string(), details)
            }
            AppError::InvalidId(raw) => {
                info!(error_code, raw = %raw, "Invalid id");
                (format!("Invalid id: {}", raw), None)
            }
            AppError::BadRequest(message) | AppError::NotFound(message) => {
                info!(error_code, "{}", message);
                (message, None)
            }
            AppError::InternalServerError(detail) => {
                error!(error_code, "Internal server error: {}", detail);
                (code.default_message().to_string(), None)
            }
        };

        let body = ErrorResponse {
            code: error_code,
            error: code.as_str().to_string(),
            message,
            details,
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn render(error: AppError) -> (StatusCode, ErrorResponse) {
        render_response(error.into_response()).await
    }

    async fn render_response(response: Response) -> (StatusCode, ErrorResponse) {
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_not_found_keeps_message() {
        let (status, body) = render(AppError::NotFound("Product 7 not found".into())).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!((body.code, body.error.as_str()), (1004, "NOT_FOUND"));
        assert_eq!(body.message, "Product 7 not found");
        assert!(body.details.is_none());
    }

    #[tokio::test]
    async fn test_bad_request_keeps_message() {
        let (status, body) = render(AppError::BadRequest("title taken".into())).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.error, "BAD_REQUEST");
        assert_eq!(body.message, "title taken");
    }

    #[tokio::test]
    async fn test_invalid_id_is_bad_request() {
        let (status, body) = render(AppError::InvalidId("abc".into())).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.error, "INVALID_ID");
        assert_eq!(body.message, "Invalid id: abc");
    }

    #[tokio::test]
    async fn test_internal_error_hides_detail() {
        let (status, body) =
            render(AppError::InternalServerError("connection refused".into())).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.error, "INTERNAL_ERROR");
        assert_eq!(body.message, ErrorCode::InternalError.default_message());
    }

    #[tokio::test]
    async fn test_fallback_is_json_404() {
        let (status, body) = render_response(handlers::not_found().await).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body.error, "NOT_FOUND");
    }
}
