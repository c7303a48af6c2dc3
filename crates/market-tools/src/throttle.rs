//! Process-wide call spacing for the NSE feed.
//!
//! NSE tolerates roughly three requests per second from one client before it
//! starts serving captchas and resetting sessions. Every feed call in the
//! process goes through a single [`CallGate`], so concurrent tool
//! invocations stay under that ceiling *collectively*, not per tool.

use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::{Instant, sleep};

/// Minimum spacing between feed calls (~3 requests/sec).
pub const NSE_SAFE_INTERVAL: Duration = Duration::from_millis(350);

/// A gate enforcing a minimum interval between admissions across
/// arbitrarily many concurrent callers.
///
/// The whole read-compare-sleep-write sequence runs under one async mutex:
/// two tasks can never both observe a stale admission time and proceed
/// without waiting. The lock is held across the sleep, which serializes
/// callers strictly — at the expected call volume that costs nothing and
/// keeps the spacing invariant trivial to reason about.
#[derive(Debug)]
pub struct CallGate {
    min_interval: Duration,
    last_admitted: Mutex<Option<Instant>>,
}

impl CallGate {
    #[must_use]
    pub fn new(min_interval: Duration) -> Self {
        Self {
            min_interval,
            last_admitted: Mutex::new(None),
        }
    }

    /// Block until at least `min_interval` has elapsed since the previous
    /// admission (on any task). The first acquisition never waits.
    ///
    /// Cannot fail; it can only delay.
    pub async fn acquire(&self) {
        let mut last = self.last_admitted.lock().await;
        if let Some(prev) = *last {
            let elapsed = prev.elapsed();
            if elapsed < self.min_interval {
                sleep(self.min_interval - elapsed).await;
            }
        }
        *last = Some(Instant::now());
    }

    #[must_use]
    pub fn interval(&self) -> Duration {
        self.min_interval
    }
}

impl Default for CallGate {
    fn default() -> Self {
        Self::new(NSE_SAFE_INTERVAL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    const INTERVAL: Duration = Duration::from_millis(350);

    #[tokio::test(start_paused = true)]
    async fn first_acquire_returns_immediately() {
        let gate = CallGate::new(INTERVAL);
        let before = Instant::now();
        gate.acquire().await;
        assert_eq!(before.elapsed(), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn sequential_acquires_are_spaced() {
        let gate = CallGate::new(INTERVAL);
        let mut admissions = Vec::new();
        for _ in 0..4 {
            gate.acquire().await;
            admissions.push(Instant::now());
        }
        for pair in admissions.windows(2) {
            assert!(pair[1] - pair[0] >= INTERVAL);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn concurrent_acquirers_never_land_inside_the_interval() {
        let gate = Arc::new(CallGate::new(INTERVAL));

        let mut handles = Vec::new();
        for _ in 0..12 {
            let gate = Arc::clone(&gate);
            handles.push(tokio::spawn(async move {
                gate.acquire().await;
                Instant::now()
            }));
        }

        let mut admissions = Vec::new();
        for handle in handles {
            admissions.push(handle.await.expect("acquirer task"));
        }
        admissions.sort();

        for pair in admissions.windows(2) {
            assert!(
                pair[1] - pair[0] >= INTERVAL,
                "two admissions only {:?} apart",
                pair[1] - pair[0]
            );
        }
    }

    #[tokio::test(start_paused = true)]
    async fn idle_gap_longer_than_the_interval_adds_no_delay() {
        let gate = CallGate::new(INTERVAL);
        gate.acquire().await;
        sleep(Duration::from_secs(2)).await;

        let before = Instant::now();
        gate.acquire().await;
        assert_eq!(before.elapsed(), Duration::ZERO);
    }
}
