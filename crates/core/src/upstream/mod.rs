mod client;
mod fetcher;

pub use client::UpstreamClient;
pub use fetcher::{CachedFetcher, DEFAULT_TTL};
