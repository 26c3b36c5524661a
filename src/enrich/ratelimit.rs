//! Sliding-window rate limiting for provider calls.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};
use std::time::{Duration, Instant};

/// Tracks recent request instants per key and admits or denies new ones.
///
/// Each key has an independent window. A denied request records nothing,
/// so denial never pushes the window further out.
#[derive(Debug, Default)]
pub struct RateLimiter {
    history: Mutex<HashMap<String, Vec<Instant>>>,
}

impl RateLimiter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Admits or denies a request for `key` under the given budget:
    /// instants older than `window` are discarded, and the request is
    /// admitted (and recorded) only while fewer than `max_requests`
    /// remain in the window.
    pub fn try_admit(&self, key: &str, max_requests: usize, window: Duration) -> bool {
        self.try_admit_at(key, max_requests, window, Instant::now())
    }

    fn try_admit_at(&self, key: &str, max_requests: usize, window: Duration, now: Instant) -> bool {
        let mut history = self
            .history
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        let timestamps = history.entry(key.to_string()).or_default();
        timestamps.retain(|&t| now.duration_since(t) < window);

        if timestamps.len() >= max_requests {
            return false;
        }

        timestamps.push(now);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WINDOW: Duration = Duration::from_secs(60);

    #[test]
    fn test_admits_up_to_budget_then_denies() {
        let limiter = RateLimiter::new();
        let now = Instant::now();

        for i in 0..10 {
            assert!(
                limiter.try_admit_at("svc", 10, WINDOW, now),
                "request {} should be admitted",
                i + 1
            );
        }
        assert!(!limiter.try_admit_at("svc", 10, WINDOW, now));
    }

    #[test]
    fn test_admission_resumes_after_window_passes() {
        let limiter = RateLimiter::new();
        let start = Instant::now();

        for _ in 0..10 {
            assert!(limiter.try_admit_at("svc", 10, WINDOW, start));
        }
        assert!(!limiter.try_admit_at("svc", 10, WINDOW, start));

        let later = start + WINDOW + Duration::from_millis(1);
        assert!(limiter.try_admit_at("svc", 10, WINDOW, later));
    }

    #[test]
    fn test_denial_does_not_consume_budget() {
        let limiter = RateLimiter::new();
        let start = Instant::now();

        for _ in 0..3 {
            assert!(limiter.try_admit_at("svc", 3, WINDOW, start));
        }
        // Hammering a full window must not extend it.
        for _ in 0..50 {
            assert!(!limiter.try_admit_at("svc", 3, WINDOW, start));
        }

        let later = start + WINDOW + Duration::from_millis(1);
        assert!(limiter.try_admit_at("svc", 3, WINDOW, later));
    }

    #[test]
    fn test_keys_are_independent() {
        let limiter = RateLimiter::new();
        let now = Instant::now();

        assert!(limiter.try_admit_at("a", 1, WINDOW, now));
        assert!(!limiter.try_admit_at("a", 1, WINDOW, now));
        assert!(limiter.try_admit_at("b", 1, WINDOW, now));
    }

    #[test]
    fn test_partial_window_expiry() {
        let limiter = RateLimiter::new();
        let start = Instant::now();

        assert!(limiter.try_admit_at("svc", 2, WINDOW, start));
        let mid = start + Duration::from_secs(30);
        assert!(limiter.try_admit_at("svc", 2, WINDOW, mid));
        assert!(!limiter.try_admit_at("svc", 2, WINDOW, mid));

        // The first instant ages out; the second is still in the window.
        let after_first = start + WINDOW + Duration::from_millis(1);
        assert!(limiter.try_admit_at("svc", 2, WINDOW, after_first));
        assert!(!limiter.try_admit_at("svc", 2, WINDOW, after_first));
    }

    #[test]
    fn test_zero_budget_denies_everything() {
        let limiter = RateLimiter::new();
        assert!(!limiter.try_admit_at("svc", 0, WINDOW, Instant::now()));
    }
}
