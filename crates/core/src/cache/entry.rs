use std::time::Duration;

use serde::{Deserialize, Serialize};

/// A cached upstream response, keyed by the request URL.
///
/// `expires_at` is an absolute unix timestamp. An entry whose deadline has
/// passed is treated as absent on read even if still physically stored;
/// there is no background sweep (passive expiry).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheEntry {
    /// Request identity: the full upstream URL.
    pub url: String,
    /// Raw serialized response body.
    pub body: String,
    /// Unix timestamp after which the entry is logically absent.
    pub expires_at: i64,
}

impl CacheEntry {
    /// Creates an entry expiring `ttl` after `now`.
    pub fn new(url: impl Into<String>, body: impl Into<String>, ttl: Duration, now: i64) -> Self {
        Self {
            url: url.into(),
            body: body.into(),
            expires_at: now + ttl.as_secs() as i64,
        }
    }

    /// Returns true if the entry is still fresh at `now`.
    ///
    /// Freshness is strict: an entry expiring exactly at `now` is stale.
    pub fn is_fresh(&self, now: i64) -> bool {
        self.expires_at > now
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WRITE_TIME: i64 = 1_700_000_000;

    fn entry_with_default_ttl() -> CacheEntry {
        CacheEntry::new(
            "https://upstream.example/films/1/",
            r#"{"title":"A New Hope"}"#,
            Duration::from_secs(1800),
            WRITE_TIME,
        )
    }

    #[test]
    fn test_fresh_within_ttl() {
        let entry = entry_with_default_ttl();
        assert!(entry.is_fresh(WRITE_TIME));
        assert!(entry.is_fresh(WRITE_TIME + 1799));
    }

    #[test]
    fn test_stale_at_and_after_deadline() {
        let entry = entry_with_default_ttl();
        assert!(!entry.is_fresh(WRITE_TIME + 1800));
        assert!(!entry.is_fresh(WRITE_TIME + 1801));
    }

    #[test]
    fn test_expires_at_is_write_time_plus_ttl() {
        let entry = entry_with_default_ttl();
        assert_eq!(entry.expires_at, WRITE_TIME + 1800);
    }

    #[test]
    fn test_serialization_field_names() {
        let entry = entry_with_default_ttl();
        let json = serde_json::to_value(&entry).unwrap();

        assert_eq!(json["url"], "https://upstream.example/films/1/");
        assert_eq!(json["expires_at"], WRITE_TIME + 1800);
    }
}
