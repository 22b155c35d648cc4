//! End-to-end persistence tests: `TaskStore` over `JsonFileStorage`, across
//! store instances.

use std::sync::Arc;

use taskdeck_core::storage::SnapshotStorage;
use taskdeck_core::task::{StatusFilter, TASKS_KEY, TaskStore};
use taskdeck_infrastructure::JsonFileStorage;
use tempfile::TempDir;

#[test]
fn test_collection_survives_store_reconstruction() {
    let dir = TempDir::new().unwrap();
    let storage = Arc::new(JsonFileStorage::new(dir.path()).unwrap());

    let mut store = TaskStore::new(storage.clone());
    let kept = store.add("buy milk").unwrap();
    let done = store.add("water the plants today").unwrap();
    store.toggle_status(&done.id).unwrap();

    let reloaded = TaskStore::new(storage);

    assert_eq!(reloaded.tasks(), store.tasks());
    assert_eq!(reloaded.filter(StatusFilter::Pending), vec![kept]);
    assert_eq!(reloaded.filter(StatusFilter::Completed).len(), 1);
}

#[test]
fn test_snapshot_slot_holds_a_json_array() {
    let dir = TempDir::new().unwrap();
    let storage = Arc::new(JsonFileStorage::new(dir.path()).unwrap());

    let mut store = TaskStore::new(storage.clone());
    store.add("buy milk").unwrap();

    let raw = storage.get(TASKS_KEY).unwrap().unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let records = value.as_array().unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["task"], "buy milk");
    assert_eq!(records[0]["completed"], false);
    assert!(records[0]["id"].as_str().is_some_and(|id| !id.is_empty()));
}

#[test]
fn test_corrupted_snapshot_file_yields_empty_store() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("tasks.json"), "{ truncated garbage").unwrap();

    let storage = Arc::new(JsonFileStorage::new(dir.path()).unwrap());
    let store = TaskStore::new(storage);

    assert!(store.is_empty());
}

#[test]
fn test_delete_is_durable() {
    let dir = TempDir::new().unwrap();
    let storage = Arc::new(JsonFileStorage::new(dir.path()).unwrap());

    let mut store = TaskStore::new(storage.clone());
    let doomed = store.add("first").unwrap();
    store.add("second").unwrap();
    store.delete(&doomed.id).unwrap();

    let reloaded = TaskStore::new(storage);

    assert_eq!(reloaded.len(), 1);
    assert!(reloaded.find(&doomed.id).is_none());
}
