//! Error taxonomy for the HTTP surface.
//!
//! Only bad input and unknown routes surface as HTTP errors. Database
//! unavailability is deliberately not a variant here — the degraded-mode
//! policy in [`crate::api_users`] shapes it as a success-status envelope so
//! callers can tell "no data source" apart from "malformed request".

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Endpoints advertised to callers that miss the route table.
pub const KNOWN_ENDPOINTS: [&str; 2] = ["/api/data", "/api/data/filter?status=X"];

/// Client-visible request failures.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The `status` query parameter was absent or empty.
    #[error("missing status parameter")]
    MissingStatus,

    /// No route matched the request.
    #[error("no matching route")]
    NotFound,

    /// An unanticipated internal fault. Details are logged at the fault
    /// site; the response body stays empty so nothing internal leaks.
    #[error("internal fault")]
    Internal,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::MissingStatus => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "success": false, "error": "Missing status parameter" })),
            )
                .into_response(),
            ApiError::NotFound => (
                StatusCode::NOT_FOUND,
                Json(json!({ "error": "Not Found", "endpoints": KNOWN_ENDPOINTS })),
            )
                .into_response(),
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
        }
    }
}

/// Fallback handler for any method/path outside the route table.
pub async fn not_found() -> ApiError {
    ApiError::NotFound
}
