//! Mutation tracking for the live store.
//!
//! Requests always read the live store, so nothing ever needs refreshing
//! after a write. What remains useful is knowing *that* the store changed:
//! every successful create/update/delete bumps a monotonic revision, which
//! the snapshot scheduler logs and can use to skip idle ticks.

use std::sync::atomic::{AtomicU64, Ordering};

/// Monotonic counter of applied mutations.
#[derive(Debug, Default)]
pub struct MutationTracker {
    revision: AtomicU64,
}

impl MutationTracker {
    /// Start at revision `0`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register one mutation and return the new revision.
    pub fn record(&self) -> u64 {
        self.revision.fetch_add(1, Ordering::AcqRel) + 1
    }

    /// Current revision.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision.load(Ordering::Acquire)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_start_at_zero() {
        assert_eq!(MutationTracker::new().revision(), 0);
    }

    #[test]
    fn should_increase_on_each_mutation() {
        let tracker = MutationTracker::new();
        assert_eq!(tracker.record(), 1);
        assert_eq!(tracker.record(), 2);
        assert_eq!(tracker.revision(), 2);
    }
}
