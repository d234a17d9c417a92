//! Pure merge of the two upstream payloads into a composite record.

use super::{CatalogFilm, FusedFilm, MediaResult};

/// Merges a catalog film and a media search match into a fused record.
///
/// The catalog supplies director and producer; the media match supplies
/// the display title, release date and poster fragment. The image URL is
/// built by prefixing the fixed asset base path to the poster fragment.
pub fn fuse(id: u32, catalog: &CatalogFilm, media: &MediaResult, image_base_url: &str) -> FusedFilm {
    FusedFilm {
        id,
        title: media.title.clone(),
        director: catalog.director.clone(),
        producer: catalog.producer.clone(),
        release_date: media.release_date.clone(),
        image_url: format!("{}{}", image_base_url, media.poster_path),
    }
}
