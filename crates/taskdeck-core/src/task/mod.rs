//! Task domain module.
//!
//! # Module Structure
//!
//! - `model`: the [`Task`] record and [`StatusFilter`]
//! - `store`: [`TaskStore`], the exclusive owner of the task collection
//!
//! # Usage
//!
//! ```ignore
//! use std::sync::Arc;
//! use taskdeck_core::task::{StatusFilter, TaskStore};
//!
//! let mut store = TaskStore::new(Arc::new(storage));
//! let task = store.add("buy milk")?;
//! store.toggle_status(&task.id)?;
//! let done = store.filter(StatusFilter::Completed);
//! ```

mod model;
mod store;

// Re-export public API
pub use model::{StatusFilter, Task};
pub use store::{TASKS_KEY, TaskStore};
