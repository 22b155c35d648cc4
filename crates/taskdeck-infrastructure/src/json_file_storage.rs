//! File-backed snapshot storage.
//!
//! The durable analog of the original browser-local storage: each slot is a
//! single file under a base directory, read whole and written whole.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use taskdeck_core::error::{Result, TaskdeckError};
use taskdeck_core::storage::SnapshotStorage;

/// A [`SnapshotStorage`] writing each slot to `<base_dir>/<key>.json`.
///
/// # Directory Structure
///
/// ```text
/// base_dir/
/// └── tasks.json
/// ```
///
/// Writes go through `fs::write`, replacing the file in full. Concurrent
/// writers are not coordinated; the last writer wins.
pub struct JsonFileStorage {
    base_dir: PathBuf,
}

impl JsonFileStorage {
    /// Creates a storage rooted at `base_dir`.
    ///
    /// The directory is created if it doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn new(base_dir: impl AsRef<Path>) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        fs::create_dir_all(&base_dir)?;
        Ok(Self { base_dir })
    }

    /// Creates a storage at the default location (`~/.taskdeck`).
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined or if
    /// the directory cannot be created.
    pub fn default_location() -> Result<Self> {
        let home_dir = dirs::home_dir()
            .ok_or_else(|| TaskdeckError::storage("cannot find home directory"))?;
        Self::new(home_dir.join(".taskdeck"))
    }

    fn slot_path(&self, key: &str) -> PathBuf {
        self.base_dir.join(format!("{key}.json"))
    }
}

impl SnapshotStorage for JsonFileStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.slot_path(key);
        if !path.exists() {
            return Ok(None);
        }
        let value = fs::read_to_string(&path)?;
        debug!(slot = key, bytes = value.len(), "read snapshot slot");
        Ok(Some(value))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let path = self.slot_path(key);
        fs::write(&path, value)?;
        debug!(slot = key, bytes = value.len(), "wrote snapshot slot");
        Ok(())
    }
}
