//! Application state with trait-object backends.
//!
//! The shared store handles are explicitly passed dependencies rather
//! than process-wide state, so tests substitute in-memory fakes. Backend
//! selection happens at compile time via feature flags.

use std::sync::Arc;

use filmfuse_core::cache::UpstreamCache;
use filmfuse_core::film::Aggregator;

use crate::config::Config;

// ============================================================================
// Compile-time feature validation
// ============================================================================

// Storage features: exactly one must be enabled, they are mutually exclusive
#[cfg(all(feature = "inmemory", feature = "dynamodb"))]
compile_error!("Cannot enable both 'inmemory' and 'dynamodb' storage features");

#[cfg(not(any(feature = "inmemory", feature = "dynamodb")))]
compile_error!("Must enable exactly one storage feature: 'inmemory' or 'dynamodb'");

/// Shared application state.
///
/// Cloned for each request handler.
#[derive(Clone)]
pub struct AppState {
    /// The fused-film read path.
    pub aggregator: Arc<Aggregator>,
    /// Upstream response cache, exposed for the live-entry listing.
    pub cache: Arc<dyn UpstreamCache>,
}

// ============================================================================
// Factory functions per backend
// ============================================================================

#[cfg(feature = "inmemory")]
mod inmemory_backend {
    use super::*;
    use filmfuse_core::upstream::CachedFetcher;

    use crate::cache::memory::MemoryCache;
    use crate::storage::inmemory::InMemoryFilmRepository;
    use crate::upstream::HttpUpstreamClient;

    impl AppState {
        /// Creates AppState with in-memory cache and film storage.
        /// Useful for local runs and tests without external dependencies.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            let cache: Arc<dyn UpstreamCache> = Arc::new(MemoryCache::new());
            let films = Arc::new(InMemoryFilmRepository::new());
            let client = Arc::new(HttpUpstreamClient::new());

            let fetcher =
                CachedFetcher::new(cache.clone(), client).with_ttl(config.cache_ttl());
            let aggregator = Arc::new(Aggregator::new(films, fetcher, config.endpoints()));

            Ok(Self { aggregator, cache })
        }
    }
}

#[cfg(feature = "dynamodb")]
mod dynamodb_backend {
    use super::*;
    use filmfuse_core::cache::SystemClock;
    use filmfuse_core::upstream::CachedFetcher;

    use crate::storage::dynamodb::{DynamoDbCache, DynamoDbFilmRepository};
    use crate::upstream::HttpUpstreamClient;

    impl AppState {
        /// Creates AppState with both stores on DynamoDB tables.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            let aws_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
            let dynamodb_client = aws_sdk_dynamodb::Client::new(&aws_config);

            let cache: Arc<dyn UpstreamCache> = Arc::new(DynamoDbCache::new(
                dynamodb_client.clone(),
                config.cache_table_name.clone(),
                Arc::new(SystemClock),
            ));
            let films = Arc::new(DynamoDbFilmRepository::new(
                dynamodb_client,
                config.films_table_name.clone(),
            ));
            let client = Arc::new(HttpUpstreamClient::new());

            let fetcher =
                CachedFetcher::new(cache.clone(), client).with_ttl(config.cache_ttl());
            let aggregator = Arc::new(Aggregator::new(films, fetcher, config.endpoints()));

            Ok(Self { aggregator, cache })
        }
    }
}

// ============================================================================
// Test support
// ============================================================================
