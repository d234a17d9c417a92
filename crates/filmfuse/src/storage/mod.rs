//! Storage backend implementations.
//!
//! Concrete implementations of the store contracts defined in
//! `filmfuse_core`. The backend is selected at compile time via feature
//! flags:
//!
//! - `inmemory` (default): HashMap-backed stores for local runs and tests
//! - `dynamodb`: AWS DynamoDB tables for both stores
//!
//! These features are mutually exclusive.

#[cfg(all(feature = "inmemory", feature = "dynamodb"))]
compile_error!(
    "Features 'inmemory' and 'dynamodb' are mutually exclusive. \
    Enable only one storage backend at a time."
);

#[cfg(not(any(feature = "inmemory", feature = "dynamodb")))]
compile_error!(
    "No storage backend selected. Enable 'inmemory' or 'dynamodb' feature. \
    Example: cargo build -p filmfuse --features inmemory"
);

#[cfg(any(feature = "inmemory", test))]
pub mod inmemory;

#[cfg(feature = "dynamodb")]
pub mod dynamodb;
