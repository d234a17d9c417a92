use thiserror::Error;

use crate::storage::RepositoryError;

/// Which upstream a failure originated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpstreamSource {
    Catalog,
    Media,
}

impl std::fmt::Display for UpstreamSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UpstreamSource::Catalog => write!(f, "catalog"),
            UpstreamSource::Media => write!(f, "media"),
        }
    }
}

/// Errors surfaced by the aggregation path.
///
/// All failures are terminal per call: no retry, no stale-cache
/// fallback, no partial persist. Messages are caller-visible and must
/// not leak upstream bodies or other internal detail.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AggregationError {
    #[error("{0}")]
    InvalidInput(String),
    #[error("Failed to fetch upstream {0}")]
    UpstreamUnavailable(UpstreamSource),
    #[error("Unexpected upstream response shape: {0}")]
    MalformedUpstream(String),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Result type for aggregation operations.
pub type Result<T> = std::result::Result<T, AggregationError>;
