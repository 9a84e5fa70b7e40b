use chrono::{DateTime, Duration, Utc};

/// Failures that cost nothing before the delay starts growing.
pub const GRACE_FAILURES: u32 = 2;

/// Upper bound on the delay between attempts, in seconds.
pub const MAX_DELAY_SECS: i64 = 300;

/// Failure history of a single subscriber.
///
/// `delay = min(300, max(0, failure_count - 2)^3)` seconds after the last failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackoffState {
    pub failure_count: u32,
    pub last_failure_at: DateTime<Utc>,
}

impl BackoffState {
    pub fn new(failure_count: u32, last_failure_at: DateTime<Utc>) -> Self {
        Self {
            failure_count,
            last_failure_at,
        }
    }

    /// State after the first recorded failure.
    pub fn first_failure(at: DateTime<Utc>) -> Self {
        Self::new(1, at)
    }

    /// State after one more failure at `at`.
    pub fn next_failure(&self, at: DateTime<Utc>) -> Self {
        Self::new(self.failure_count.saturating_add(1), at)
    }

    pub fn delay_seconds(&self) -> i64 {
        let over = i64::from(self.failure_count.saturating_sub(GRACE_FAILURES));
        // 7^3 already exceeds the cap; clamping first keeps the cube from overflowing.
        let over = over.min(7);
        (over * over * over).min(MAX_DELAY_SECS)
    }

    pub fn next_attempt_at(&self) -> DateTime<Utc> {
        self.last_failure_at + Duration::seconds(self.delay_seconds())
    }

    #[inline]
    pub fn allows_attempt_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.next_attempt_at()
    }
}
