//! Cancellable timers keyed by purpose.
//!
//! The core never owns a real clock. Components record deadlines here and the
//! host polls with the current time. A key holds at most one pending deadline,
//! so scheduling always replaces (cancels) the previous timer for that key.

use fnv::FnvHashMap;
use std::hash::Hash;

/// Milliseconds on the host's monotonic clock.
pub type Millis = f64;

#[derive(Clone, Debug)]
pub struct TimerSet<K> {
    pending: FnvHashMap<K, Millis>,
}

impl<K> Default for TimerSet<K> {
    fn default() -> Self {
        Self {
            pending: FnvHashMap::default(),
        }
    }
}

impl<K: Copy + Eq + Hash> TimerSet<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm `key` to fire at `at`, cancelling any timer already pending for it.
    pub fn schedule(&mut self, key: K, at: Millis) {
        self.cancel(key);
        self.pending.insert(key, at);
    }

    /// Returns true when a pending timer was removed.
    pub fn cancel(&mut self, key: K) -> bool {
        self.pending.remove(&key).is_some()
    }

    pub fn cancel_all(&mut self) {
        self.pending.clear();
    }

    pub fn is_pending(&self, key: K) -> bool {
        self.pending.contains_key(&key)
    }

    pub fn deadline(&self, key: K) -> Option<Millis> {
        self.pending.get(&key).copied()
    }

    pub fn next_deadline(&self) -> Option<Millis> {
        self.pending.values().copied().reduce(Millis::min)
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Remove and return the earliest timer due at `now`, with its deadline.
    pub fn pop_due(&mut self, now: Millis) -> Option<(K, Millis)> {
        let (key, at) = self
            .pending
            .iter()
            .filter(|(_, at)| **at <= now)
            .min_by(|a, b| a.1.total_cmp(b.1))
            .map(|(k, at)| (*k, *at))?;
        self.pending.remove(&key);
        Some((key, at))
    }
}
