//! DynamoDB error mapping.
//!
//! Maps AWS SDK errors to the store error types from `filmfuse_core`.

use std::fmt::Debug;

use aws_sdk_dynamodb::error::SdkError;
use aws_sdk_dynamodb::operation::get_item::GetItemError;
use aws_sdk_dynamodb::operation::put_item::PutItemError;
use aws_sdk_dynamodb::operation::scan::ScanError;

use filmfuse_core::cache::CacheError;
use filmfuse_core::storage::RepositoryError;

/// Map a GetItem SDK error to RepositoryError.
pub fn map_get_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<GetItemError, R>,
) -> RepositoryError {
    match err.into_service_error() {
        GetItemError::ResourceNotFoundException(_) => {
            RepositoryError::QueryFailed("Table not found".to_string())
        }
        GetItemError::ProvisionedThroughputExceededException(_) => {
            RepositoryError::QueryFailed("Throughput exceeded, please retry".to_string())
        }
        GetItemError::RequestLimitExceeded(_) => {
            RepositoryError::QueryFailed("Request limit exceeded, please retry".to_string())
        }
        GetItemError::InternalServerError(_) => {
            RepositoryError::QueryFailed("DynamoDB internal server error".to_string())
        }
        err => RepositoryError::QueryFailed(format!("GetItem failed: {:?}", err)),
    }
}

/// Map a PutItem SDK error to RepositoryError.
pub fn map_put_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<PutItemError, R>,
) -> RepositoryError {
    match err.into_service_error() {
        PutItemError::ResourceNotFoundException(_) => {
            RepositoryError::QueryFailed("Table not found".to_string())
        }
        PutItemError::ProvisionedThroughputExceededException(_) => {
            RepositoryError::QueryFailed("Throughput exceeded, please retry".to_string())
        }
        PutItemError::RequestLimitExceeded(_) => {
            RepositoryError::QueryFailed("Request limit exceeded, please retry".to_string())
        }
        PutItemError::InternalServerError(_) => {
            RepositoryError::QueryFailed("DynamoDB internal server error".to_string())
        }
        err => RepositoryError::QueryFailed(format!("PutItem failed: {:?}", err)),
    }
}

/// Map a GetItem SDK error on the cache table to CacheError.
pub fn map_cache_get_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<GetItemError, R>,
) -> CacheError {
    CacheError::OperationFailed(map_get_item_error(err).to_string())
}

/// Map a PutItem SDK error on the cache table to CacheError.
pub fn map_cache_put_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<PutItemError, R>,
) -> CacheError {
    CacheError::OperationFailed(map_put_item_error(err).to_string())
}

/// Map a Scan SDK error on the cache table to CacheError.
pub fn map_cache_scan_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<ScanError, R>,
) -> CacheError {
    match err.into_service_error() {
        ScanError::ResourceNotFoundException(_) => {
            CacheError::OperationFailed("Table not found".to_string())
        }
        ScanError::ProvisionedThroughputExceededException(_) => {
            CacheError::OperationFailed("Throughput exceeded, please retry".to_string())
        }
        ScanError::RequestLimitExceeded(_) => {
            CacheError::OperationFailed("Request limit exceeded, please retry".to_string())
        }
        ScanError::InternalServerError(_) => {
            CacheError::OperationFailed("DynamoDB internal server error".to_string())
        }
        err => CacheError::OperationFailed(format!("Scan failed: {:?}", err)),
    }
}
