//! DynamoDB storage backend.
//!
//! Two tables: one holding fused film records keyed by numeric id, one
//! holding cached upstream responses keyed by request URL with a TTL
//! attribute. The table-level TTL deletion is a store concern; the cache
//! additionally checks freshness on every read.

mod cache;
mod conversions;
mod error;
mod repository;

pub use cache::DynamoDbCache;
pub use repository::DynamoDbFilmRepository;
