//! Aggregation of the two upstreams into a memoized composite record.

use std::sync::Arc;

use crate::storage::FilmRepository;
use crate::upstream::CachedFetcher;

use super::{
    catalog_film_url, fuse, media_search_url, release_year, AggregationError, CatalogFilm,
    FusedFilm, MediaSearch, Result, UpstreamSource,
};

/// Base URLs and credentials for both upstreams.
#[derive(Debug, Clone)]
pub struct UpstreamEndpoints {
    pub catalog_base_url: String,
    pub media_base_url: String,
    pub media_api_key: String,
    pub media_image_base_url: String,
}

/// Orchestrates the fused-film read path.
///
/// Already-fused ids are served straight from the film repository and
/// never re-aggregated. On a miss the two upstream calls run
/// sequentially (the media search is parameterized by the catalog
/// result), the merge happens in memory, and the record is persisted
/// before returning. Nothing intermediate is ever written: a failure at
/// any step leaves the repository untouched.
///
/// The read-then-write sequence is not atomic. Concurrent aggregation of
/// the same id can duplicate upstream calls and writes; the write is
/// idempotent, so the race is wasteful but harmless.
pub struct Aggregator {
    films: Arc<dyn FilmRepository>,
    fetcher: CachedFetcher,
    endpoints: UpstreamEndpoints,
}

impl Aggregator {
    pub fn new(
        films: Arc<dyn FilmRepository>,
        fetcher: CachedFetcher,
        endpoints: UpstreamEndpoints,
    ) -> Self {
        Self {
            films,
            fetcher,
            endpoints,
        }
    }

    /// Returns the fused film for a catalog id, aggregating it on first
    /// request.
    pub async fn get_fused(&self, id: u32) -> Result<FusedFilm> {
        if let Some(film) = self.films.get_film(id).await? {
            tracing::debug!(film_id = id, "Serving previously fused film");
            return Ok(film);
        }

        let catalog_url = catalog_film_url(&self.endpoints.catalog_base_url, id);
        let catalog: CatalogFilm = self
            .fetcher
            .fetch_or_cache(&catalog_url)
            .await?
            .ok_or(AggregationError::UpstreamUnavailable(UpstreamSource::Catalog))?;

        let search_url = media_search_url(
            &self.endpoints.media_base_url,
            &self.endpoints.media_api_key,
            &catalog.title,
            release_year(&catalog.release_date),
        );
        let search: MediaSearch = self
            .fetcher
            .fetch_or_cache(&search_url)
            .await?
            .ok_or(AggregationError::UpstreamUnavailable(UpstreamSource::Media))?;

        let best_match = search.results.first().ok_or_else(|| {
            AggregationError::MalformedUpstream(format!(
                "media search for \"{}\" returned no results",
                catalog.title
            ))
        })?;

        let film = fuse(id, &catalog, best_match, &self.endpoints.media_image_base_url);
        self.films.put_film(&film).await?;
        tracing::info!(film_id = id, title = %film.title, "Fused film persisted");

        Ok(film)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    use async_trait::async_trait;
    use tokio::sync::RwLock;

    use crate::cache::{CacheEntry, Result as CacheResult, UpstreamCache};
    use crate::storage::Result as StorageResult;
    use crate::upstream::UpstreamClient;

    const CATALOG_BODY: &str = r#"{
        "title": "A New Hope",
        "episode_id": 4,
        "opening_crawl": "It is a period of civil war.",
        "director": "George Lucas",
        "producer": "Gary Kurtz",
        "release_date": "1977-05-25"
    }"#;

    const MEDIA_BODY: &str = r#"{
        "results": [
            {"title": "Star Wars", "poster_path": "/abc.jpg", "release_date": "1977-05-25"}
        ]
    }"#;

    const EMPTY_MEDIA_BODY: &str = r#"{"results": []}"#;

    fn endpoints() -> UpstreamEndpoints {
        UpstreamEndpoints {
            catalog_base_url: "https://catalog.example".to_string(),
            media_base_url: "https://media.example".to_string(),
            media_api_key: "key".to_string(),
            media_image_base_url: "https://image.tmdb.org/t/p/w500".to_string(),
        }
    }

    fn catalog_url() -> String {
        "https://catalog.example/films/1/".to_string()
    }

    fn media_url() -> String {
        "https://media.example/search/movie?api_key=key&query=A%20New%20Hope&year=1977".to_string()
    }

    // Repository mock counting reads and writes.
    #[derive(Default)]
    struct MockFilmRepository {
        films: RwLock<HashMap<u32, FusedFilm>>,
        get_calls: AtomicUsize,
        put_calls: AtomicUsize,
    }

    #[async_trait]
    impl FilmRepository for MockFilmRepository {
        async fn get_film(&self, id: u32) -> StorageResult<Option<FusedFilm>> {
            self.get_calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.films.read().await.get(&id).cloned())
        }

        async fn put_film(&self, film: &FusedFilm) -> StorageResult<()> {
            self.put_calls.fetch_add(1, Ordering::SeqCst);
            self.films.write().await.insert(film.id, film.clone());
            Ok(())
        }
    }

    // Pass-through cache so every fetch is a miss on first use and a hit
    // afterwards.
    #[derive(Default)]
    struct MapCache {
        store: RwLock<HashMap<String, String>>,
    }

    #[async_trait]
    impl UpstreamCache for MapCache {
        async fn get(&self, url: &str) -> CacheResult<Option<String>> {
            Ok(self.store.read().await.get(url).cloned())
        }

        async fn put(&self, url: &str, body: &str, _ttl: Duration) -> CacheResult<()> {
            self.store
                .write()
                .await
                .insert(url.to_string(), body.to_string());
            Ok(())
        }

        async fn live_entries(&self) -> CacheResult<Vec<CacheEntry>> {
            Ok(Vec::new())
        }
    }

    // Upstream mock keyed by URL, counting calls per URL.
    #[derive(Default)]
    struct RoutedClient {
        responses: HashMap<String, String>,
        calls: AtomicUsize,
    }

    impl RoutedClient {
        fn with(mut self, url: String, body: &str) -> Self {
            self.responses.insert(url, body.to_string());
            self
        }
    }

    #[async_trait]
    impl UpstreamClient for RoutedClient {
        async fn fetch(&self, url: &str) -> Option<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.responses.get(url).cloned()
        }
    }

    fn aggregator(
        repo: Arc<MockFilmRepository>,
        client: Arc<RoutedClient>,
    ) -> Aggregator {
        let cache = Arc::new(MapCache::default());
        let fetcher = CachedFetcher::new(cache, client);
        Aggregator::new(repo, fetcher, endpoints())
    }

    fn expected_film() -> FusedFilm {
        FusedFilm {
            id: 1,
            title: "Star Wars".to_string(),
            director: "George Lucas".to_string(),
            producer: "Gary Kurtz".to_string(),
            release_date: "1977-05-25".to_string(),
            image_url: "https://image.tmdb.org/t/p/w500/abc.jpg".to_string(),
        }
    }

    #[tokio::test]
    async fn test_full_aggregation_merges_and_persists() {
        let repo = Arc::new(MockFilmRepository::default());
        let client = Arc::new(
            RoutedClient::default()
                .with(catalog_url(), CATALOG_BODY)
                .with(media_url(), MEDIA_BODY),
        );
        let aggregator = aggregator(repo.clone(), client.clone());

        let film = aggregator.get_fused(1).await.unwrap();

        assert_eq!(film, expected_film());
        assert_eq!(client.calls.load(Ordering::SeqCst), 2);
        assert_eq!(repo.put_calls.load(Ordering::SeqCst), 1);
        assert_eq!(repo.films.read().await.get(&1), Some(&expected_film()));
    }

    #[tokio::test]
    async fn test_second_call_is_idempotent_with_zero_upstream_calls() {
        let repo = Arc::new(MockFilmRepository::default());
        let client = Arc::new(
            RoutedClient::default()
                .with(catalog_url(), CATALOG_BODY)
                .with(media_url(), MEDIA_BODY),
        );
        let aggregator = aggregator(repo.clone(), client.clone());

        let first = aggregator.get_fused(1).await.unwrap();
        let calls_after_first = client.calls.load(Ordering::SeqCst);

        let second = aggregator.get_fused(1).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(client.calls.load(Ordering::SeqCst), calls_after_first);
        assert_eq!(repo.put_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_memoized_film_short_circuits_before_any_fetch() {
        let repo = Arc::new(MockFilmRepository::default());
        repo.films.write().await.insert(1, expected_film());
        let client = Arc::new(RoutedClient::default());
        let aggregator = aggregator(repo, client.clone());

        let film = aggregator.get_fused(1).await.unwrap();

        assert_eq!(film, expected_film());
        assert_eq!(client.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_catalog_failure_leaves_repository_unwritten() {
        let repo = Arc::new(MockFilmRepository::default());
        // No catalog response registered: the live call fails.
        let client = Arc::new(RoutedClient::default().with(media_url(), MEDIA_BODY));
        let aggregator = aggregator(repo.clone(), client);

        let err = aggregator.get_fused(1).await.unwrap_err();

        assert_eq!(
            err,
            AggregationError::UpstreamUnavailable(UpstreamSource::Catalog)
        );
        assert_eq!(repo.put_calls.load(Ordering::SeqCst), 0);
        assert!(repo.films.read().await.is_empty());
    }

    #[tokio::test]
    async fn test_media_failure_leaves_repository_unwritten() {
        let repo = Arc::new(MockFilmRepository::default());
        let client = Arc::new(RoutedClient::default().with(catalog_url(), CATALOG_BODY));
        let aggregator = aggregator(repo.clone(), client);

        let err = aggregator.get_fused(1).await.unwrap_err();

        assert_eq!(
            err,
            AggregationError::UpstreamUnavailable(UpstreamSource::Media)
        );
        assert_eq!(repo.put_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_empty_media_results_is_malformed_upstream() {
        let repo = Arc::new(MockFilmRepository::default());
        let client = Arc::new(
            RoutedClient::default()
                .with(catalog_url(), CATALOG_BODY)
                .with(media_url(), EMPTY_MEDIA_BODY),
        );
        let aggregator = aggregator(repo.clone(), client);

        let err = aggregator.get_fused(1).await.unwrap_err();

        assert!(matches!(err, AggregationError::MalformedUpstream(_)));
        assert_eq!(repo.put_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_media_url_uses_catalog_title_and_year() {
        // The routed client only answers the exact expected media URL,
        // so a successful aggregation proves the URL construction.
        let repo = Arc::new(MockFilmRepository::default());
        let client = Arc::new(
            RoutedClient::default()
                .with(catalog_url(), CATALOG_BODY)
                .with(media_url(), MEDIA_BODY),
        );
        let aggregator = aggregator(repo, client);

        assert!(aggregator.get_fused(1).await.is_ok());
    }
}
