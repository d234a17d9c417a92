//! In-memory film repository.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use filmfuse_core::film::FusedFilm;
use filmfuse_core::storage::{FilmRepository, Result};

/// In-memory storage backend for fused films.
///
/// Uses a HashMap wrapped in `Arc<RwLock<_>>` for thread-safe access.
/// Data is not persisted and will be lost when the repository is dropped.
#[derive(Debug, Clone, Default)]
pub struct InMemoryFilmRepository {
    films: Arc<RwLock<HashMap<u32, FusedFilm>>>,
}

impl InMemoryFilmRepository {
    /// Creates a new empty repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl FilmRepository for InMemoryFilmRepository {
    async fn get_film(&self, id: u32) -> Result<Option<FusedFilm>> {
        let films = self.films.read().await;
        Ok(films.get(&id).cloned())
    }

    async fn put_film(&self, film: &FusedFilm) -> Result<()> {
        let mut films = self.films.write().await;
        films.insert(film.id, film.clone());
        Ok(())
    }
}
