//! Task collection management.
//!
//! [`TaskStore`] owns the ordered task collection and keeps its persisted
//! snapshot in sync: the collection is loaded from storage once at
//! construction and written back in full after every mutation.

use std::sync::Arc;

use tracing::{debug, warn};
use uuid::Uuid;

use crate::error::Result;
use crate::formatter::format_task;
use crate::storage::SnapshotStorage;
use crate::task::model::{StatusFilter, Task};

/// The storage slot holding the serialized task collection.
///
/// [`TaskStore`] never reads or writes any other key.
pub const TASKS_KEY: &str = "tasks";

/// The central manager for task records.
///
/// `TaskStore` is the exclusive owner of the collection: records are
/// created, mutated, and removed only through its operations, and insertion
/// order is preserved except on deletion. Lookup misses are signaled with
/// `Option` or a no-op, never with an error; a failed storage write surfaces
/// as `Err` and is not retried.
pub struct TaskStore {
    storage: Arc<dyn SnapshotStorage>,
    tasks: Vec<Task>,
}

impl TaskStore {
    /// Creates a store over `storage`, loading any previously persisted
    /// collection from the [`TASKS_KEY`] slot.
    ///
    /// An absent slot, a storage read failure, and an unparseable snapshot
    /// all yield an empty collection; prior data is never a precondition.
    pub fn new(storage: Arc<dyn SnapshotStorage>) -> Self {
        let tasks = load_snapshot(storage.as_ref());
        Self { storage, tasks }
    }

    /// Creates a task from `raw_text` and appends it to the collection.
    ///
    /// The stored text is the display-formatted (truncated) form of
    /// `raw_text`, the new record starts out not completed, and its id is a
    /// freshly generated UUID. Rejecting empty input is the caller's
    /// responsibility; the store accepts any string.
    pub fn add(&mut self, raw_text: &str) -> Result<Task> {
        let task = Task {
            id: Uuid::new_v4().to_string(),
            task: format_task(raw_text),
            completed: false,
        };
        self.tasks.push(task.clone());
        self.persist()?;
        Ok(task)
    }

    /// Replaces the text of the task with the given id.
    ///
    /// The new text is stored verbatim, without the truncation `add`
    /// applies. Returns the updated record, or `Ok(None)` (without a
    /// storage write) when no task has that id.
    pub fn edit(&mut self, id: &str, new_text: &str) -> Result<Option<Task>> {
        let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) else {
            return Ok(None);
        };
        task.task = new_text.to_string();
        let updated = task.clone();
        self.persist()?;
        Ok(Some(updated))
    }

    /// Removes the task with the given id, if present.
    ///
    /// The snapshot is written even when nothing matched.
    pub fn delete(&mut self, id: &str) -> Result<()> {
        self.tasks.retain(|t| t.id != id);
        self.persist()
    }

    /// Flips the completion flag of the task with the given id.
    ///
    /// No-op, including no storage write, when no task matches.
    pub fn toggle_status(&mut self, id: &str) -> Result<()> {
        if let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) {
            task.completed = !task.completed;
            self.persist()?;
        }
        Ok(())
    }

    /// Empties the collection.
    ///
    /// Skips the storage write when the collection is already empty.
    pub fn clear_all(&mut self) -> Result<()> {
        if !self.tasks.is_empty() {
            self.tasks.clear();
            self.persist()?;
        }
        Ok(())
    }

    /// Returns the records matching `filter`, in insertion order.
    pub fn filter(&self, filter: StatusFilter) -> Vec<Task> {
        match filter {
            StatusFilter::All => self.tasks.clone(),
            StatusFilter::Pending => self
                .tasks
                .iter()
                .filter(|t| !t.completed)
                .cloned()
                .collect(),
            StatusFilter::Completed => {
                self.tasks.iter().filter(|t| t.completed).cloned().collect()
            }
        }
    }

    /// Filters by one of the lowercase filter keys.
    ///
    /// Unrecognized keys match nothing and yield an empty vec.
    pub fn filter_by_key(&self, key: &str) -> Vec<Task> {
        match StatusFilter::from_key(key) {
            Some(filter) => self.filter(filter),
            None => Vec::new(),
        }
    }

    /// Finds a task by id.
    pub fn find(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Returns the full collection, in insertion order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Returns the number of records.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns `true` when the collection holds no records.
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    fn persist(&self) -> Result<()> {
        let snapshot = serde_json::to_string_pretty(&self.tasks)?;
        self.storage.set(TASKS_KEY, &snapshot)?;
        debug!(count = self.tasks.len(), "persisted task snapshot");
        Ok(())
    }
}

fn load_snapshot(storage: &dyn SnapshotStorage) -> Vec<Task> {
    let raw = match storage.get(TASKS_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(err) => {
            warn!(error = %err, "failed to read task snapshot, starting empty");
            return Vec::new();
        }
    };
    match serde_json::from_str(&raw) {
        Ok(tasks) => tasks,
        Err(err) => {
            warn!(error = %err, "discarding unparseable task snapshot");
            Vec::new()
        }
    }
}
