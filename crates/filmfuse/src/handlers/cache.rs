use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::state::AppState;

/// List unexpired upstream cache entries (GET /cache/entries).
///
/// The underlying store is paginated to exhaustion before the batch is
/// returned.
pub async fn list_live_entries(State(state): State<AppState>) -> Response {
    match state.cache.live_entries().await {
        Ok(entries) => (StatusCode::OK, Json(entries)).into_response(),
        Err(err) => {
            tracing::error!(error = %err, "Failed to list live cache entries");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({ "error": "Failed to list cache entries" })),
            )
                .into_response()
        }
    }
}
