//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use mockapi_domain::error::MockApiError;

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps [`MockApiError`] to an HTTP response with appropriate status code.
pub struct ApiError(MockApiError);

impl From<MockApiError> for ApiError {
    fn from(err: MockApiError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            MockApiError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            MockApiError::NotFound(err) => (StatusCode::NOT_FOUND, err.to_string()),
            MockApiError::Conflict(err) => (StatusCode::CONFLICT, err.to_string()),
            MockApiError::Storage(err) => {
                tracing::error!(error = %err, "storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
