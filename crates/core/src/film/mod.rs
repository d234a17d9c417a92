mod aggregate;
mod error;
mod http_mapping;
mod merge;
mod types;
mod urls;

pub use aggregate::{Aggregator, UpstreamEndpoints};
pub use error::{AggregationError, Result, UpstreamSource};
pub use http_mapping::aggregation_error_to_status_code;
pub use merge::fuse;
pub use types::{CatalogFilm, FusedFilm, MediaResult, MediaSearch};
pub use urls::{catalog_film_url, media_search_url, release_year};
