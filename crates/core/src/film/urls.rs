//! Request identity construction for both upstreams.
//!
//! These URLs double as cache keys, so they must be deterministic for a
//! given input.

/// Returns the catalog lookup URL for a film id.
pub fn catalog_film_url(base_url: &str, id: u32) -> String {
    format!("{}/films/{}/", base_url, id)
}

/// Returns the media search URL for a title and release year.
///
/// The title is percent-encoded; the year narrows the search to the
/// original release rather than re-releases.
pub fn media_search_url(base_url: &str, api_key: &str, title: &str, year: &str) -> String {
    format!(
        "{}/search/movie?api_key={}&query={}&year={}",
        base_url,
        api_key,
        urlencoding::encode(title),
        year
    )
}

/// Extracts the year portion (first four characters) of a catalog
/// release date such as `1977-05-25`.
pub fn release_year(release_date: &str) -> &str {
    release_date.get(..4).unwrap_or(release_date)
}
