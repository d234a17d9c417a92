use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use filmfuse_core::film::{aggregation_error_to_status_code, AggregationError};

/// Wrapper turning aggregation errors into JSON error responses.
///
/// Every failure yields a structured `{"error": "..."}` payload with a
/// human-readable message; no internal detail is leaked.
pub struct ApiError(pub AggregationError);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(aggregation_error_to_status_code(&self.0))
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        (status, Json(serde_json::json!({ "error": self.0.to_string() }))).into_response()
    }
}

impl From<AggregationError> for ApiError {
    fn from(err: AggregationError) -> Self {
        Self(err)
    }
}
