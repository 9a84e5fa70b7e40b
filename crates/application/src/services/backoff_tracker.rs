use crate::ports::Clock;
use dashmap::DashMap;
use netid_domain::BackoffState;
use std::sync::Arc;
use tracing::debug;

/// Per-subscriber failure counter and cool-down clock.
///
/// The first two failures are free; after that the delay grows cubically up
/// to five minutes, so a flapping subscriber is throttled without a hard
/// circuit-open state. Never fails.
pub struct BackoffTracker {
    states: DashMap<Arc<str>, BackoffState>,
    clock: Arc<dyn Clock>,
}

impl BackoffTracker {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            states: DashMap::new(),
            clock,
        }
    }

    /// False while the subscriber is still cooling down.
    pub fn should_attempt(&self, key: &str) -> bool {
        match self.states.get(key) {
            Some(state) => state.allows_attempt_at(self.clock.now()),
            None => true,
        }
    }

    pub fn record_success(&self, key: &str) {
        if self.states.remove(key).is_some() {
            debug!(key, "Backoff cleared");
        }
    }

    pub fn record_failure(&self, key: &str) {
        let now = self.clock.now();

        let state = *self
            .states
            .entry(Arc::from(key))
            .and_modify(|state| *state = state.next_failure(now))
            .or_insert_with(|| BackoffState::first_failure(now));

        debug!(
            key,
            failures = state.failure_count,
            delay_secs = state.delay_seconds(),
            "Backoff failure recorded"
        );
    }

    pub fn state(&self, key: &str) -> Option<BackoffState> {
        self.states.get(key).map(|state| *state)
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}
