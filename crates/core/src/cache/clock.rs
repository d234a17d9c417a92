use chrono::Utc;

/// Source of wall-clock unix timestamps.
///
/// Cache freshness is decided against wall-clock time at read, so the
/// clock is an injected dependency rather than a direct call to the
/// system time. Tests substitute a manual clock to exercise expiration
/// boundaries without sleeping.
pub trait Clock: Send + Sync {
    /// Returns the current unix timestamp in seconds.
    fn now_unix(&self) -> i64;
}

/// Production clock backed by the system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_unix(&self) -> i64 {
        Utc::now().timestamp()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_clock_is_monotonic_enough() {
        let clock = SystemClock;
        let first = clock.now_unix();
        let second = clock.now_unix();
        assert!(second >= first);
        // Sanity: after 2020-01-01.
        assert!(first > 1_577_836_800);
    }
}
