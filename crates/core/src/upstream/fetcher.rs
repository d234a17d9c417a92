//! Cache-aside fetcher for upstream calls.
//!
//! The caller checks the cache first and populates it on miss; the cache
//! never intercepts calls transparently. Failed live calls are never
//! cached, so a transient upstream outage does not poison the window.

use std::sync::Arc;
use std::time::Duration;

use serde::de::DeserializeOwned;

use crate::cache::UpstreamCache;
use crate::film::{AggregationError, Result};

use super::UpstreamClient;

/// Fixed TTL for cached upstream responses.
///
/// All upstream responses are assumed to have comparable staleness
/// tolerance; there is no per-source override.
pub const DEFAULT_TTL: Duration = Duration::from_secs(1800);

/// Fetches upstream responses through the time-bounded cache.
pub struct CachedFetcher {
    cache: Arc<dyn UpstreamCache>,
    client: Arc<dyn UpstreamClient>,
    ttl: Duration,
}

impl CachedFetcher {
    /// Creates a fetcher with the default 30-minute TTL.
    pub fn new(cache: Arc<dyn UpstreamCache>, client: Arc<dyn UpstreamClient>) -> Self {
        Self {
            cache,
            client,
            ttl: DEFAULT_TTL,
        }
    }

    /// Overrides the TTL applied to newly cached responses.
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    /// Returns the cached response for `url` if fresh, otherwise
    /// performs the live call and populates the cache.
    ///
    /// Returns `Ok(None)` when the live call fails; failures are not
    /// cached and not retried. A body that does not deserialize into `T`
    /// is a malformed-upstream error, whether it came from the cache or
    /// from the wire.
    pub async fn fetch_or_cache<T: DeserializeOwned>(&self, url: &str) -> Result<Option<T>> {
        match self.cache.get(url).await {
            Ok(Some(body)) => {
                tracing::trace!(%url, "Upstream cache hit");
                return decode(&body).map(Some);
            }
            Ok(None) => {
                tracing::trace!(%url, "Upstream cache miss");
            }
            Err(err) => {
                // A broken cache degrades to a live call; it must not
                // fail the request.
                tracing::warn!(%url, error = %err, "Upstream cache read failed, fetching live");
            }
        }

        let Some(body) = self.client.fetch(url).await else {
            tracing::warn!(%url, "Live upstream call failed");
            return Ok(None);
        };

        if let Err(err) = self.cache.put(url, &body, self.ttl).await {
            tracing::warn!(%url, error = %err, "Failed to cache upstream response");
        }

        decode(&body).map(Some)
    }
}

fn decode<T: DeserializeOwned>(body: &str) -> Result<T> {
    serde_json::from_str(body).map_err(|err| AggregationError::MalformedUpstream(err.to_string()))
}
