//! Typed error handling for the dish and order handlers
//!
//! Every failure a request can hit is one of two kinds:
//!
//! - [`GrubError::NotFound`]: the route identifier (or the path itself) is unknown
//! - [`GrubError::BadRequest`]: a check rejected the request body or the requested transition
//!
//! Both carry a human-readable message that is surfaced to the caller verbatim.
//!
//! # Example
//!
//! ```rust
//! use grubdash::core::error::GrubError;
//! use axum::http::StatusCode;
//!
//! let err = GrubError::missing_field("Dish", "price");
//! assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
//! assert_eq!(err.to_string(), "Dish must include a price.");
//! ```

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The error type returned by every check and effect
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GrubError {
    /// A record (or route) could not be located
    #[error("{message}")]
    NotFound { message: String },

    /// Validation failure: missing field, wrong type, out-of-range value,
    /// forbidden status transition, identity mismatch or delete-on-non-pending
    #[error("{message}")]
    BadRequest { message: String },
}

/// Error body sent to HTTP clients
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    /// Numeric HTTP status, repeated in the body
    pub status: u16,
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
}

impl GrubError {
    pub fn not_found(message: impl Into<String>) -> Self {
        GrubError::NotFound {
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        GrubError::BadRequest {
            message: message.into(),
        }
    }

    /// `{Resource} must include a {field}.`
    pub fn missing_field(resource: &str, field: &str) -> Self {
        Self::bad_request(format!("{} must include a {}.", resource, field))
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            GrubError::NotFound { .. } => StatusCode::NOT_FOUND,
            GrubError::BadRequest { .. } => StatusCode::BAD_REQUEST,
        }
    }

    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            GrubError::NotFound { .. } => "NOT_FOUND",
            GrubError::BadRequest { .. } => "BAD_REQUEST",
        }
    }

    pub fn message(&self) -> &str {
        match self {
            GrubError::NotFound { message } | GrubError::BadRequest { message } => message,
        }
    }

    /// Convert to an error response
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            status: self.status_code().as_u16(),
            code: self.error_code().to_string(),
            message: self.message().to_string(),
        }
    }
}

impl IntoResponse for GrubError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(self.to_response());
        (status, body).into_response()
    }
}

impl From<serde_json::Error> for GrubError {
    fn from(err: serde_json::Error) -> Self {
        GrubError::bad_request(format!("Request body is not valid JSON: {}", err))
    }
}

/// A specialized Result type for check and effect functions
pub type GrubResult<T> = Result<T, GrubError>;
