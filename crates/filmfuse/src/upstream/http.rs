//! Live upstream transport over reqwest.

use async_trait::async_trait;

use filmfuse_core::upstream::UpstreamClient;

/// HTTP client for live upstream calls.
///
/// Failures are logged and collapse to `None`; retries and timeouts are
/// the transport's concern, not the aggregation core's.
#[derive(Debug, Clone, Default)]
pub struct HttpUpstreamClient {
    http: reqwest::Client,
}

impl HttpUpstreamClient {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UpstreamClient for HttpUpstreamClient {
    async fn fetch(&self, url: &str) -> Option<String> {
        match self.http.get(url).send().await {
            Ok(response) if response.status().is_success() => match response.text().await {
                Ok(body) => Some(body),
                Err(err) => {
                    tracing::warn!(%url, error = %err, "Failed to read upstream response body");
                    None
                }
            },
            Ok(response) => {
                tracing::warn!(%url, status = %response.status(), "Upstream returned non-success status");
                None
            }
            Err(err) => {
                tracing::warn!(%url, error = %err, "Upstream request failed");
                None
            }
        }
    }
}
