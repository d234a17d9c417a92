use std::time::Duration;

use async_trait::async_trait;

use super::{CacheEntry, Result};

/// Trait for the time-bounded upstream response cache.
///
/// Keys are full request URLs; values are raw serialized response bodies.
/// Implementations must honor passive expiry: a stored entry whose
/// deadline has passed is indistinguishable from one that never existed.
#[async_trait]
pub trait UpstreamCache: Send + Sync {
    /// Gets the cached body for a URL, or `None` if missing or expired.
    async fn get(&self, url: &str) -> Result<Option<String>>;

    /// Stores a response body with the given TTL, overwriting any
    /// previous entry for the same URL (last-write-wins).
    async fn put(&self, url: &str, body: &str, ttl: Duration) -> Result<()>;

    /// Returns every unexpired entry, fully materialized.
    ///
    /// Implementations backed by a paginated store must follow
    /// continuation keys until exhausted before returning.
    async fn live_entries(&self) -> Result<Vec<CacheEntry>>;
}
