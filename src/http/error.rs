//! Request-scoped error responses.
//!
//! Every error converts to a JSON response before the next request is
//! handled; none is fatal to the process.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::movies::validate::FieldError;

/// Errors a resource operation can surface to the caller.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Path-based lookup found no matching record.
    #[error("movie not found")]
    NotFound,

    /// One or more field-level schema violations on a write payload.
    #[error("invalid movie payload")]
    Validation(Vec<FieldError>),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound => (
                StatusCode::NOT_FOUND,
                Json(json!({ "message": "Movie not found" })),
            )
                .into_response(),
            ApiError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": errors })),
            )
                .into_response(),
        }
    }
}
