use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

/// Typed error taxonomy for the HTTP boundary.
///
/// Handlers map database-layer results onto these variants; the
/// [`IntoResponse`] impl produces the JSON error envelope with the
/// matching status code.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// A single-entity read or targeted mutation found no row.
    #[error("{0} not found")]
    NotFound(&'static str),

    /// A required field was missing or blank, or an input referenced a
    /// nonexistent row.
    #[error("{0}")]
    Validation(String),

    /// A uniqueness constraint would be violated (duplicate category name).
    #[error("{0}")]
    Conflict(String),

    /// Unexpected storage failure. Never swallowed: logged here and the
    /// message exposed in the response body diagnostically.
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

/// Convenience type alias for handler return values.
pub type ApiResult<T> = Result<T, ApiError>;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::Internal(err) => {
                tracing::error!(error = %err, "Unexpected storage failure");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = json!({ "success": false, "error": self.to_string() });
        (status, Json(body)).into_response()
    }
}
