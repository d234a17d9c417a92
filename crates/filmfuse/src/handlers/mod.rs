pub mod cache;
pub mod error;
pub mod films;
pub mod health;

pub use error::ApiError;
