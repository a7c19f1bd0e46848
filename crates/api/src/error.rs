//! API error types with HTTP response mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// JSON envelope emitted for every error response.
#[derive(Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
    pub message: &'static str,
}

/// API-level error type that maps to HTTP responses.
#[derive(Debug)]
pub enum ApiError {
    /// No route matched the requested method and path.
    NotFound,
    /// Unexpected fault inside a handler. The detail is logged at error
    /// severity and never serialized into the response body.
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::NotFound => (
                StatusCode::NOT_FOUND,
                ErrorBody {
                    error: "Not Found",
                    message: "The requested resource was not found",
                },
            ),
            ApiError::Internal(detail) => {
                tracing::error!(error = %detail, "internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorBody {
                        error: "Internal Server Error",
                        message: "An unexpected error occurred",
                    },
                )
            }
        };

        (status, axum::Json(body)).into_response()
    }
}
