use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use filmfuse_core::film::{AggregationError, FusedFilm};

use crate::{handlers::ApiError, state::AppState};

/// Query parameters for the fused-film endpoint.
///
/// `id` is kept as a raw string so a missing parameter and a malformed
/// one produce distinct messages instead of a generic extractor
/// rejection.
#[derive(Debug, Deserialize)]
pub struct FilmQuery {
    pub id: Option<String>,
}

/// Get a fused film (GET /films?id={n}).
///
/// Validation happens before any upstream or store call is made.
pub async fn get_film(
    State(state): State<AppState>,
    Query(query): Query<FilmQuery>,
) -> Result<Json<FusedFilm>, ApiError> {
    let raw = query.id.ok_or_else(|| {
        AggregationError::InvalidInput("Missing required parameter \"id\"".to_string())
    })?;
    let id: u32 = raw.parse().map_err(|_| {
        AggregationError::InvalidInput(format!(
            "Parameter \"id\" must be a non-negative integer, got \"{raw}\""
        ))
    })?;

    let film = state.aggregator.get_fused(id).await?;
    Ok(Json(film))
}
