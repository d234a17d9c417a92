use serde::{Deserialize, Serialize};

/// Film metadata as returned by the catalog upstream.
///
/// Validated at the boundary: a response that does not match this shape
/// surfaces as a malformed-upstream error instead of propagating
/// loosely-typed data through the merge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogFilm {
    pub title: String,
    pub episode_id: u32,
    pub opening_crawl: String,
    pub director: String,
    pub producer: String,
    pub release_date: String,
}

/// One match from the media upstream's movie search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaResult {
    pub title: String,
    pub poster_path: String,
    pub release_date: String,
}

/// Search envelope returned by the media upstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaSearch {
    pub results: Vec<MediaResult>,
}

/// The composite record merged from both upstreams.
///
/// Written once per id on first successful aggregation and never
/// mutated afterwards. Wire field names are kept from the public API
/// contract, which predates this service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FusedFilm {
    pub id: u32,
    #[serde(rename = "titulo")]
    pub title: String,
    pub director: String,
    #[serde(rename = "productor")]
    pub producer: String,
    #[serde(rename = "fecha_lanzamiento")]
    pub release_date: String,
    #[serde(rename = "url_imagen")]
    pub image_url: String,
}
