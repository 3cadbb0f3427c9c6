//! Versioned snapshot publication.

use std::sync::{Arc, PoisonError, RwLock};

use rate_core::{RateConfig, RateSnapshot, RateTable};

/// Single-writer, many-reader holder of the current [`RateSnapshot`].
///
/// Readers clone the `Arc` under a short read lock and then work on their
/// own copy for the whole event. A publish swaps the pointer; the new
/// snapshot is fully built before the write lock is taken.
pub struct SnapshotStore {
    current: RwLock<Arc<RateSnapshot>>,
}

impl SnapshotStore {
    /// Store holding the initial disabled snapshot (version 0).
    pub fn new() -> Self {
        Self {
            current: RwLock::new(Arc::new(RateSnapshot::disabled())),
        }
    }

    /// The snapshot currently visible to award events.
    pub fn current(&self) -> Arc<RateSnapshot> {
        // The guarded value is an immutable Arc, so a poisoned lock is still consistent.
        let guard = self.current.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&guard)
    }

    /// Publishes a new configuration and table under the next version.
    pub fn publish(&self, config: RateConfig, table: RateTable) -> Arc<RateSnapshot> {
        let mut slot = self.current.write().unwrap_or_else(PoisonError::into_inner);
        let snapshot = Arc::new(RateSnapshot::new(slot.version + 1, config, table));
        *slot = Arc::clone(&snapshot);
        snapshot
    }

    /// Version of the current snapshot.
    pub fn version(&self) -> u64 {
        self.current().version
    }
}

impl Default for SnapshotStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_snapshot_is_disabled() {
        let store = SnapshotStore::new();
        let snapshot = store.current();

        assert_eq!(snapshot.version, 0);
        assert!(!snapshot.is_activated());
        assert!(snapshot.table.is_empty());
    }

    #[test]
    fn test_publish_bumps_version() {
        let store = SnapshotStore::new();
        let before = store.current();

        let published = store.publish(RateConfig::activated(50, 1.0, 1.0), RateTable::empty());

        assert_eq!(published.version, 1);
        assert_eq!(store.version(), 1);
        assert!(store.current().is_activated());
        // Readers holding the old snapshot keep it.
        assert_eq!(before.version, 0);
        assert!(!before.is_activated());
    }
}
