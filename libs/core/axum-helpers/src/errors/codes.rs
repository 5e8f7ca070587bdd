//! Error identifiers carried in every error body
//!
//! ```rust
//! use axum_helpers::errors::ErrorCode;
//!
//! assert_eq!(ErrorCode::NotFound.as_str(), "NOT_FOUND");
//! assert_eq!(ErrorCode::NotFound.code(), 1004);
//! ```

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Body failed `validator` rules
    ValidationError,
    /// Path id is not an integer
    InvalidId,
    /// Body is not the expected JSON
    JsonExtraction,
    NotFound,
    /// Input breaks a catalog rule
    BadRequest,
    InternalError,
}

impl ErrorCode {
    /// (identifier, numeric code, default message)
    const fn parts(self) -> (&'static str, i32, &'static str) {
        match self {
            Self::ValidationError => ("VALIDATION_ERROR", 1001, "Request validation failed"),
            Self::InvalidId => ("INVALID_ID", 1002, "Invalid id format"),
            Self::JsonExtraction => ("JSON_EXTRACTION", 1003, "Failed to parse request body"),
            Self::NotFound => ("NOT_FOUND", 1004, "Resource not found"),
            Self::InternalError => ("INTERNAL_ERROR", 1005, "An internal server error occurred"),
            Self::BadRequest => ("BAD_REQUEST", 1006, "Bad request"),
        }
    }

    /// Identifier clients match on, identical to the serde form
    pub const fn as_str(self) -> &'static str {
        self.parts().0
    }

    /// Numeric code for logs and dashboards
    pub const fn code(self) -> i32 {
        self.parts().1
    }

    pub const fn default_message(self) -> &'static str {
        self.parts().2
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
