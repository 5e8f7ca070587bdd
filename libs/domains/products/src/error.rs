use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProductError {
    #[error("Product not found: {0}")]
    NotFound(i32),

    /// Rejected as a bad request: the title is already taken by another product
    #[error("Product with title '{0}' already exists")]
    DuplicateTitle(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl ProductError {
    /// True for errors raised when a caller asks for an id the store does not hold
    pub fn is_not_found(&self) -> bool {
        matches!(self, ProductError::NotFound(_))
    }

    /// True for errors caused by the caller's input violating a catalog rule
    pub fn is_bad_request(&self) -> bool {
        matches!(self, ProductError::DuplicateTitle(_))
    }
}

pub type ProductResult<T> = Result<T, ProductError>;

/// Convert ProductError to AppError for standardized error responses
impl From<ProductError> for AppError {
    fn from(err: ProductError) -> Self {
        match err {
            ProductError::NotFound(id) => AppError::NotFound(format!("Product {} not found", id)),
            ProductError::DuplicateTitle(title) => {
                AppError::BadRequest(format!("Product with title '{}' already exists", title))
            }
            ProductError::Database(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for ProductError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

impl From<sea_orm::DbErr> for ProductError {
    fn from(err: sea_orm::DbErr) -> Self {
        ProductError::Database(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_error_kinds() {
        assert!(ProductError::NotFound(7).is_not_found());
        assert!(!ProductError::NotFound(7).is_bad_request());
        assert!(ProductError::DuplicateTitle("Dator".to_string()).is_bad_request());
        assert!(!ProductError::Database("boom".to_string()).is_not_found());
        assert!(!ProductError::Database("boom".to_string()).is_bad_request());
    }

    #[test]
    fn test_error_status_codes() {
        let response = ProductError::NotFound(1).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = ProductError::DuplicateTitle("Dator".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = ProductError::Database("connection reset".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_db_err_maps_to_database() {
        let err: ProductError = sea_orm::DbErr::Custom("pool closed".to_string()).into();
        assert!(matches!(err, ProductError::Database(msg) if msg.contains("pool closed")));
    }
}
