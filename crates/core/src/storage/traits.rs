use async_trait::async_trait;

use crate::film::FusedFilm;

use super::Result;

/// Repository for assembled film records.
///
/// Acts as a permanent memoization layer: a record written for an id is
/// treated as immutable truth and short-circuits any later aggregation
/// of that id. Duplicate writes for the same id carry identical content,
/// so concurrent writers race harmlessly.
#[async_trait]
pub trait FilmRepository: Send + Sync {
    /// Gets a previously fused film by its catalog id.
    async fn get_film(&self, id: u32) -> Result<Option<FusedFilm>>;

    /// Persists a fused film keyed by its catalog id.
    async fn put_film(&self, film: &FusedFilm) -> Result<()>;
}
