//! Sliding-window rate limiting for the model-backed endpoints.

use std::collections::HashMap;
use std::sync::RwLock;
use std::sync::atomic::{AtomicU64, Ordering};

fn epoch_secs() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}

/// One user's window: remaining budget plus the window start second.
///
/// Lock-free on the hot path. There is a benign race where two threads
/// both observe an expired window and reset it, granting a couple of
/// extra requests at the boundary; approximate enforcement is fine here.
struct Window {
    remaining: AtomicU64,
    started: AtomicU64,
    max_requests: u64,
    window_secs: u64,
}

impl Window {
    fn new(max_requests: u64, window_secs: u64) -> Self {
        Self {
            remaining: AtomicU64::new(max_requests),
            started: AtomicU64::new(epoch_secs()),
            max_requests,
            window_secs,
        }
    }

    /// Consume one request. `false` means the caller is over budget.
    fn check(&self) -> bool {
        let now = epoch_secs();
        let started = self.started.load(Ordering::Relaxed);
        if now.saturating_sub(started) >= self.window_secs {
            self.started.store(now, Ordering::Relaxed);
            self.remaining
                .store(self.max_requests.saturating_sub(1), Ordering::Relaxed);
            return true;
        }

        loop {
            let current = self.remaining.load(Ordering::Relaxed);
            if current == 0 {
                return false;
            }
            if self
                .remaining
                .compare_exchange_weak(current, current - 1, Ordering::Relaxed, Ordering::Relaxed)
                .is_ok()
            {
                return true;
            }
        }
    }
}

/// Per-user rate limiter keyed on user_id.
///
/// Each user gets an independent window, so one user cannot exhaust the
/// budget for everyone else.
pub struct PerUserRateLimiter {
    windows: RwLock<HashMap<String, Window>>,
    max_requests: u64,
    window_secs: u64,
}

impl PerUserRateLimiter {
    pub fn new(max_requests: u64, window_secs: u64) -> Self {
        Self {
            windows: RwLock::new(HashMap::new()),
            max_requests,
            window_secs,
        }
    }

    /// Consume one request for `user_id`. Returns `true` if allowed.
    pub fn check(&self, user_id: &str) -> bool {
        // Fast path under the read lock. If another thread panicked while
        // holding the lock, let the request through instead of crashing.
        {
            let windows = match self.windows.read() {
                Ok(map) => map,
                Err(poisoned) => poisoned.into_inner(),
            };
            if let Some(window) = windows.get(user_id) {
                return window.check();
            }
        }

        let mut windows = match self.windows.write() {
            Ok(map) => map,
            Err(poisoned) => poisoned.into_inner(),
        };
        windows
            .entry(user_id.to_string())
            .or_insert_with(|| Window::new(self.max_requests, self.window_secs))
            .check()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allows_up_to_budget_then_blocks() {
        let limiter = PerUserRateLimiter::new(3, 60);
        assert!(limiter.check("alice"));
        assert!(limiter.check("alice"));
        assert!(limiter.check("alice"));
        assert!(!limiter.check("alice"));
    }

    #[test]
    fn budgets_are_per_user() {
        let limiter = PerUserRateLimiter::new(1, 60);
        assert!(limiter.check("alice"));
        assert!(!limiter.check("alice"));
        assert!(limiter.check("bob"));
    }

    #[test]
    fn expired_window_resets_budget() {
        let limiter = PerUserRateLimiter::new(1, 0);
        // window_secs of zero means every check starts a fresh window
        assert!(limiter.check("alice"));
        assert!(limiter.check("alice"));
    }
}
