use std::{env, time::Duration};

use filmfuse_core::film::UpstreamEndpoints;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the catalog upstream (default: "https://swapi.dev/api")
    pub catalog_base_url: String,
    /// Base URL of the media upstream (default: "https://api.themoviedb.org/3")
    pub media_base_url: String,
    /// API key for the media upstream (default: empty)
    pub media_api_key: String,
    /// Base path prefixed to poster fragments
    /// (default: "https://image.tmdb.org/t/p/w500")
    pub media_image_base_url: String,
    /// Upstream cache TTL in seconds (default: 1800)
    pub cache_ttl_seconds: u64,
    /// DynamoDB table holding cached upstream responses
    /// (default: "filmfuse-cache")
    /// Note: Only used when the `dynamodb` feature is enabled.
    #[allow(dead_code)]
    pub cache_table_name: String,
    /// DynamoDB table holding fused film records (default: "filmfuse-films")
    /// Note: Only used when the `dynamodb` feature is enabled.
    #[allow(dead_code)]
    pub films_table_name: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `CATALOG_BASE_URL` - Catalog upstream base URL
    /// - `MEDIA_BASE_URL` - Media upstream base URL
    /// - `MEDIA_API_KEY` - Media upstream API key
    /// - `MEDIA_IMAGE_BASE_URL` - Poster asset base path
    /// - `CACHE_TTL_SECONDS` - Upstream cache TTL in seconds (default: 1800)
    /// - `CACHE_TABLE_NAME` - DynamoDB cache table (default: "filmfuse-cache")
    /// - `FILMS_TABLE_NAME` - DynamoDB films table (default: "filmfuse-films")
    pub fn from_env() -> Self {
        Self {
            catalog_base_url: env::var("CATALOG_BASE_URL")
                .unwrap_or_else(|_| "https://swapi.dev/api".to_string()),
            media_base_url: env::var("MEDIA_BASE_URL")
                .unwrap_or_else(|_| "https://api.themoviedb.org/3".to_string()),
            media_api_key: env::var("MEDIA_API_KEY").unwrap_or_default(),
            media_image_base_url: env::var("MEDIA_IMAGE_BASE_URL")
                .unwrap_or_else(|_| "https://image.tmdb.org/t/p/w500".to_string()),
            cache_ttl_seconds: env::var("CACHE_TTL_SECONDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(1800),
            cache_table_name: env::var("CACHE_TABLE_NAME")
                .unwrap_or_else(|_| "filmfuse-cache".to_string()),
            films_table_name: env::var("FILMS_TABLE_NAME")
                .unwrap_or_else(|_| "filmfuse-films".to_string()),
        }
    }

    /// Get the upstream cache TTL as a Duration.
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_seconds)
    }

    /// Upstream endpoints for the aggregator.
    pub fn endpoints(&self) -> UpstreamEndpoints {
        UpstreamEndpoints {
            catalog_base_url: self.catalog_base_url.clone(),
            media_base_url: self.media_base_url.clone(),
            media_api_key: self.media_api_key.clone(),
            media_image_base_url: self.media_image_base_url.clone(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
