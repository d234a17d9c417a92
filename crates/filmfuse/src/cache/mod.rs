//! Upstream cache backends.
//!
//! The in-memory backend backs the `inmemory` feature and all tests;
//! the DynamoDB-backed cache lives with the rest of the DynamoDB code
//! under `storage::dynamodb`.

#[cfg(any(feature = "inmemory", test))]
pub mod memory;
