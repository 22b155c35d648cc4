//! Snapshot storage trait.
//!
//! Defines the interface for persisting the serialized task collection.

use crate::error::Result;

/// An abstract key-value slot store for serialized snapshots.
///
/// This trait decouples [`TaskStore`](crate::task::TaskStore) from the
/// concrete storage mechanism (in-memory map, JSON file on disk, anything
/// exposing get/set semantics). The store treats it as a durability sink:
/// whole-value writes after each mutation, one read at construction.
///
/// Both operations take `&self`; implementations use interior mutability.
/// This lets a caller keep an `Arc` of the storage it injected and inspect
/// it afterwards, which is how the tests observe write behavior.
pub trait SnapshotStorage: Send + Sync {
    /// Reads the value stored under `key`.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(value))`: slot present
    /// - `Ok(None)`: slot absent
    /// - `Err(_)`: the storage itself failed
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Writes `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<()>;
}
