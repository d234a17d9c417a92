//! DynamoDB attribute conversion functions.
//!
//! Pure functions for converting between DynamoDB AttributeValue maps
//! and domain types. These are testable in isolation without DynamoDB
//! access.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;

use filmfuse_core::cache::{CacheEntry, CacheError};
use filmfuse_core::film::FusedFilm;
use filmfuse_core::storage::RepositoryError;

fn require_s<'a>(
    item: &'a HashMap<String, AttributeValue>,
    name: &str,
) -> Result<&'a str, RepositoryError> {
    item.get(name)
        .and_then(|value| value.as_s().ok())
        .map(String::as_str)
        .ok_or_else(|| {
            RepositoryError::InvalidData(format!("missing or non-string attribute: {name}"))
        })
}

fn require_n(item: &HashMap<String, AttributeValue>, name: &str) -> Result<i64, RepositoryError> {
    item.get(name)
        .and_then(|value| value.as_n().ok())
        .and_then(|raw| raw.parse().ok())
        .ok_or_else(|| {
            RepositoryError::InvalidData(format!("missing or non-numeric attribute: {name}"))
        })
}

// ============================================================================
// Fused film conversions
// ============================================================================

/// Convert a fused film to a DynamoDB item, using the wire attribute
/// names the table has always carried.
pub fn film_to_item(film: &FusedFilm) -> HashMap<String, AttributeValue> {
    let mut item = HashMap::new();

    item.insert("id".to_string(), AttributeValue::N(film.id.to_string()));
    item.insert("titulo".to_string(), AttributeValue::S(film.title.clone()));
    item.insert(
        "director".to_string(),
        AttributeValue::S(film.director.clone()),
    );
    item.insert(
        "productor".to_string(),
        AttributeValue::S(film.producer.clone()),
    );
    item.insert(
        "fecha_lanzamiento".to_string(),
        AttributeValue::S(film.release_date.clone()),
    );
    item.insert(
        "url_imagen".to_string(),
        AttributeValue::S(film.image_url.clone()),
    );

    item
}

/// Convert a DynamoDB item to a fused film.
pub fn item_to_film(item: &HashMap<String, AttributeValue>) -> Result<FusedFilm, RepositoryError> {
    let id = require_n(item, "id")?;
    let id = u32::try_from(id)
        .map_err(|_| RepositoryError::InvalidData(format!("film id out of range: {id}")))?;

    Ok(FusedFilm {
        id,
        title: require_s(item, "titulo")?.to_string(),
        director: require_s(item, "director")?.to_string(),
        producer: require_s(item, "productor")?.to_string(),
        release_date: require_s(item, "fecha_lanzamiento")?.to_string(),
        image_url: require_s(item, "url_imagen")?.to_string(),
    })
}

// ============================================================================
// Cache entry conversions
// ============================================================================

/// Convert a cache entry to a DynamoDB item.
pub fn entry_to_item(entry: &CacheEntry) -> HashMap<String, AttributeValue> {
    let mut item = HashMap::new();

    item.insert("url".to_string(), AttributeValue::S(entry.url.clone()));
    item.insert("body".to_string(), AttributeValue::S(entry.body.clone()));
    item.insert(
        "expires_at".to_string(),
        AttributeValue::N(entry.expires_at.to_string()),
    );

    item
}

/// Convert a DynamoDB item to a cache entry.
pub fn item_to_entry(item: &HashMap<String, AttributeValue>) -> Result<CacheEntry, CacheError> {
    let as_cache_error = |err: RepositoryError| CacheError::Serialization(err.to_string());

    Ok(CacheEntry {
        url: require_s(item, "url").map_err(as_cache_error)?.to_string(),
        body: require_s(item, "body").map_err(as_cache_error)?.to_string(),
        expires_at: require_n(item, "expires_at").map_err(as_cache_error)?,
    })
}
