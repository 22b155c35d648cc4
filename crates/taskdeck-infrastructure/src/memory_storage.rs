//! In-memory snapshot storage.

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use taskdeck_core::error::Result;
use taskdeck_core::storage::SnapshotStorage;

/// A [`SnapshotStorage`] backed by a process-local map.
///
/// Nothing survives the process, so this serves two roles: an ephemeral
/// store for callers that do not want durability, and a test double.
/// [`write_count`](Self::write_count) reports how many `set` calls the
/// storage has absorbed, which lets tests assert which operations actually
/// persisted.
#[derive(Default)]
pub struct InMemoryStorage {
    slots: Mutex<HashMap<String, String>>,
    writes: AtomicUsize,
}

impl InMemoryStorage {
    /// Creates an empty storage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a storage pre-seeded with a single slot.
    pub fn with_slot(key: impl Into<String>, value: impl Into<String>) -> Self {
        let storage = Self::new();
        storage
            .slots
            .lock()
            .expect("storage mutex poisoned")
            .insert(key.into(), value.into());
        storage
    }

    /// Number of `set` calls performed so far.
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

impl SnapshotStorage for InMemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let slots = self.slots.lock().expect("storage mutex poisoned");
        Ok(slots.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut slots = self.slots.lock().expect("storage mutex poisoned");
        slots.insert(key.to_string(), value.to_string());
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
