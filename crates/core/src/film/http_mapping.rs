//! Pure functions for mapping aggregation errors to HTTP status codes.

use super::AggregationError;

/// Maps an [`AggregationError`] to an HTTP status code.
///
/// - `InvalidInput` -> 400 (Bad Request)
/// - `UpstreamUnavailable` -> 500 (Internal Server Error)
/// - `MalformedUpstream` -> 502 (Bad Gateway)
/// - `Repository` -> 500 (Internal Server Error)
pub fn aggregation_error_to_status_code(error: &AggregationError) -> u16 {
    match error {
        AggregationError::InvalidInput(_) => 400,
        AggregationError::UpstreamUnavailable(_) => 500,
        AggregationError::MalformedUpstream(_) => 502,
        AggregationError::Repository(_) => 500,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::film::UpstreamSource;
    use crate::storage::RepositoryError;

    #[test]
    fn test_invalid_input_maps_to_400() {
        let error = AggregationError::InvalidInput("missing id".to_string());
        assert_eq!(aggregation_error_to_status_code(&error), 400);
    }

    #[test]
    fn test_upstream_unavailable_maps_to_500() {
        for source in [UpstreamSource::Catalog, UpstreamSource::Media] {
            let error = AggregationError::UpstreamUnavailable(source);
            assert_eq!(aggregation_error_to_status_code(&error), 500);
        }
    }

    #[test]
    fn test_malformed_upstream_maps_to_502() {
        let error = AggregationError::MalformedUpstream("empty result list".to_string());
        assert_eq!(aggregation_error_to_status_code(&error), 502);
    }

    #[test]
    fn test_repository_maps_to_500() {
        let error = AggregationError::Repository(RepositoryError::QueryFailed("x".to_string()));
        assert_eq!(aggregation_error_to_status_code(&error), 500);
    }
}
