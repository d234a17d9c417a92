//! In-memory upstream cache.
//!
//! Thread-safe map with wall-clock TTL and lazy expiration. Expired
//! entries are treated as absent on read but are not actively removed;
//! there is no sweep and no size-based eviction.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::RwLock;

use filmfuse_core::cache::{CacheEntry, Clock, Result, SystemClock, UpstreamCache};

/// In-memory cache keyed by request URL.
///
/// The clock is injected so tests can step time across expiration
/// boundaries without sleeping.
#[derive(Clone)]
pub struct MemoryCache {
    store: Arc<RwLock<HashMap<String, CacheEntry>>>,
    clock: Arc<dyn Clock>,
}

impl MemoryCache {
    /// Creates a cache backed by the system clock.
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    /// Creates a cache with an explicit clock.
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            store: Arc::new(RwLock::new(HashMap::new())),
            clock,
        }
    }
}

impl Default for MemoryCache {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UpstreamCache for MemoryCache {
    async fn get(&self, url: &str) -> Result<Option<String>> {
        let now = self.clock.now_unix();
        let store = self.store.read().await;

        Ok(store
            .get(url)
            .filter(|entry| entry.is_fresh(now))
            .map(|entry| entry.body.clone()))
    }

    async fn put(&self, url: &str, body: &str, ttl: Duration) -> Result<()> {
        let entry = CacheEntry::new(url, body, ttl, self.clock.now_unix());
        self.store.write().await.insert(url.to_string(), entry);
        Ok(())
    }

    async fn live_entries(&self) -> Result<Vec<CacheEntry>> {
        let now = self.clock.now_unix();
        let store = self.store.read().await;

        // The whole map is one page; nothing to continue from.
        Ok(store
            .values()
            .filter(|entry| entry.is_fresh(now))
            .cloned()
            .collect())
    }
}
