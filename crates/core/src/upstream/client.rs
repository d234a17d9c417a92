use async_trait::async_trait;

/// Trait for performing live upstream calls.
///
/// Implementations own the transport; the fetcher owns the caching.
#[async_trait]
pub trait UpstreamClient: Send + Sync {
    /// Performs a GET against the URL and returns the raw response body
    /// on a success status.
    ///
    /// Returns `None` on transport failure or a non-success status.
    /// Implementations must not retry and must not panic; absence of
    /// data is representable.
    async fn fetch(&self, url: &str) -> Option<String>;
}
