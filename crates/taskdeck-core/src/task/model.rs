//! Task domain model.

use serde::{Deserialize, Serialize};

/// A single task record.
///
/// Records are created by [`TaskStore::add`](crate::task::TaskStore::add)
/// and mutated only through the store. The `id` is assigned at creation and
/// never changes or gets reused, even after the record is deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Opaque unique identifier.
    pub id: String,
    /// Free-form text content.
    pub task: String,
    /// Completion flag, `false` for new records.
    pub completed: bool,
}

/// Completion-status filter for listing tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusFilter {
    /// Every record, in insertion order.
    All,
    /// Records not yet completed.
    Pending,
    /// Completed records.
    Completed,
}

impl StatusFilter {
    /// Parses one of the lowercase filter keys: `"all"`, `"pending"`, or
    /// `"completed"`. Any other key yields `None`.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "all" => Some(Self::All),
            "pending" => Some(Self::Pending),
            "completed" => Some(Self::Completed),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_keys_parse() {
        assert_eq!(StatusFilter::from_key("all"), Some(StatusFilter::All));
        assert_eq!(StatusFilter::from_key("pending"), Some(StatusFilter::Pending));
        assert_eq!(
            StatusFilter::from_key("completed"),
            Some(StatusFilter::Completed)
        );
    }

    #[test]
    fn test_unknown_filter_key_is_none() {
        assert_eq!(StatusFilter::from_key("bogus"), None);
        assert_eq!(StatusFilter::from_key("Pending"), None);
        assert_eq!(StatusFilter::from_key(""), None);
    }

    #[test]
    fn test_task_serialization_shape() {
        let task = Task {
            id: "abc123".to_string(),
            task: "buy milk".to_string(),
            completed: false,
        };
        let json = serde_json::to_string(&task).unwrap();
        assert_eq!(json, r#"{"id":"abc123","task":"buy milk","completed":false}"#);

        let back: Task = serde_json::from_str(&json).unwrap();
        assert_eq!(back, task);
    }
}
