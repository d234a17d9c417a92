mod clock;
mod entry;
mod error;
mod traits;

pub use clock::{Clock, SystemClock};
pub use entry::CacheEntry;
pub use error::{CacheError, Result};
pub use traits::UpstreamCache;
