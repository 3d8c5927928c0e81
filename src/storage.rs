//! Snapshot persistence: one named slot in a key/value blob store.
//!
//! The board serializes to a single JSON blob under [`SNAPSHOT_KEY`]. Saving
//! is fire-and-forget after each accepted mutation; loading validates the
//! blob's structure before decoding and falls back to "absent" on any
//! failure, never returning a partially valid board.

use crate::error::{Result, StoreError};
use crate::types::Board;
use serde_json::Value;
use std::collections::HashMap;

/// Slot key the board snapshot is stored under
pub const SNAPSHOT_KEY: &str = "kanbanData";

/// A key/value blob store, e.g. session-scoped browser storage
pub trait BlobStore {
    /// Read the blob at `key`, if present
    fn get(&self, key: &str) -> Option<String>;
    /// Write `value` to `key`, replacing any previous blob
    fn set(&mut self, key: &str, value: String);
}

/// In-memory blob store
#[derive(Debug, Default)]
pub struct MemoryBlobStore {
    slots: HashMap<String, String>,
}

impl MemoryBlobStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

impl BlobStore for MemoryBlobStore {
    fn get(&self, key: &str) -> Option<String> {
        self.slots.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) {
        self.slots.insert(key.to_string(), value);
    }
}

/// Binds a blob store to the snapshot slot and handles (de)serialization
pub struct SnapshotStorage<S> {
    store: S,
    key: String,
}

impl<S: BlobStore> SnapshotStorage<S> {
    /// Create storage over the default snapshot slot
    pub fn new(store: S) -> Self {
        Self::with_key(store, SNAPSHOT_KEY)
    }

    /// Create storage over a custom slot key
    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// Load the persisted board, or `None` when the slot is empty or the
    /// blob fails parsing, structural validation, or decoding. Invalid
    /// snapshots are discarded silently so the caller falls back to the
    /// default board.
    pub fn load(&self) -> Option<Board> {
        let raw = self.store.get(&self.key)?;
        match decode_snapshot(&raw) {
            Ok(board) => Some(board),
            Err(err) => {
                tracing::debug!(error = %err, "discarding invalid board snapshot");
                None
            }
        }
    }

    /// Persist the board. Best-effort: a serialization failure is logged and
    /// dropped rather than surfaced, matching the crash-tolerance model where
    /// at most the latest mutation is lost.
    pub fn save(&mut self, board: &Board) {
        match serde_json::to_string(board) {
            Ok(raw) => self.store.set(&self.key, raw),
            Err(err) => tracing::warn!(error = %err, "failed to serialize board snapshot"),
        }
    }

    /// Access the underlying blob store
    pub fn store(&self) -> &S {
        &self.store
    }
}

fn decode_snapshot(raw: &str) -> Result<Board> {
    let value: Value = serde_json::from_str(raw)?;
    validate_snapshot(&value)?;
    Ok(serde_json::from_value(value)?)
}

/// Structural validation applied before decoding a snapshot.
///
/// A candidate is acceptable iff it is an object whose `columns` is an
/// object, whose `columnOrder` is a non-empty array of strings, and every id
/// in `columnOrder` maps to a `columns` entry carrying a `tasks` array.
/// Deliberately no more than that: task-id uniqueness and `columns` keys
/// absent from `columnOrder` are tolerated, matching what historical
/// snapshots were held to.
fn validate_snapshot(value: &Value) -> Result<()> {
    let Some(object) = value.as_object() else {
        return Err(StoreError::invalid_snapshot("not an object"));
    };

    let Some(columns) = object.get("columns").and_then(Value::as_object) else {
        return Err(StoreError::invalid_snapshot("columns is not an object"));
    };

    let Some(column_order) = object.get("columnOrder").and_then(Value::as_array) else {
        return Err(StoreError::invalid_snapshot("columnOrder is not an array"));
    };
    if column_order.is_empty() {
        return Err(StoreError::invalid_snapshot("columnOrder is empty"));
    }

    for entry in column_order {
        let Some(id) = entry.as_str() else {
            return Err(StoreError::invalid_snapshot("columnOrder entry is not a string"));
        };
        let Some(column) = columns.get(id).and_then(Value::as_object) else {
            return Err(StoreError::invalid_snapshot(format!(
                "columnOrder id '{id}' has no column entry"
            )));
        };
        if !column.get("tasks").is_some_and(Value::is_array) {
            return Err(StoreError::invalid_snapshot(format!(
                "column '{id}' has no tasks array"
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defaults::default_board;

    fn storage_with(raw: &str) -> SnapshotStorage<MemoryBlobStore> {
        let mut store = MemoryBlobStore::new();
        store.set(SNAPSHOT_KEY, raw.to_string());
        SnapshotStorage::new(store)
    }

    #[test]
    fn test_round_trip() {
        let board = default_board();
        let mut storage = SnapshotStorage::new(MemoryBlobStore::new());

        storage.save(&board);
        assert_eq!(storage.load().unwrap(), board);
    }

    #[test]
    fn test_load_empty_slot() {
        let storage = SnapshotStorage::new(MemoryBlobStore::new());
        assert!(storage.load().is_none());
    }

    #[test]
    fn test_load_rejects_unparseable_blob() {
        assert!(storage_with("{not json").load().is_none());
    }

    #[test]
    fn test_load_rejects_wrong_shape() {
        assert!(storage_with("[]").load().is_none());
        assert!(storage_with("{\"columns\": {}, \"columnOrder\": []}").load().is_none());
        assert!(storage_with("{\"columns\": [], \"columnOrder\": [\"todo\"]}")
            .load()
            .is_none());
        assert!(storage_with("{\"columns\": {}, \"columnOrder\": [1]}").load().is_none());
    }

    #[test]
    fn test_load_rejects_dangling_column_order_id() {
        let raw = r#"{
            "columns": {
                "todo": {"id": "todo", "title": "To Do", "tasks": []}
            },
            "columnOrder": ["todo", "ghost"]
        }"#;
        assert!(storage_with(raw).load().is_none());
    }

    #[test]
    fn test_load_rejects_column_without_tasks_array() {
        let raw = r#"{
            "columns": {"todo": {"id": "todo", "title": "To Do", "tasks": "nope"}},
            "columnOrder": ["todo"]
        }"#;
        assert!(storage_with(raw).load().is_none());
    }

    #[test]
    fn test_load_accepts_snapshot_with_arbitrary_task_ids() {
        let raw = r#"{
            "columns": {
                "todo": {"id": "todo", "title": "To Do",
                         "tasks": [{"id": "task-1700000000000", "content": "legacy"}]}
            },
            "columnOrder": ["todo"]
        }"#;
        let board = storage_with(raw).load().unwrap();
        assert_eq!(board.task_count(), 1);
    }

    #[test]
    fn test_load_tolerates_extra_columns_entry() {
        // A columns key missing from columnOrder is accepted; display simply
        // never reaches it.
        let raw = r#"{
            "columns": {
                "todo": {"id": "todo", "title": "To Do", "tasks": []},
                "orphan": {"id": "orphan", "title": "Orphan", "tasks": []}
            },
            "columnOrder": ["todo"]
        }"#;
        let board = storage_with(raw).load().unwrap();
        assert_eq!(board.ordered_columns().count(), 1);
        assert_eq!(board.columns.len(), 2);
    }

    #[test]
    fn test_custom_slot_key() {
        let board = default_board();
        let mut storage = SnapshotStorage::with_key(MemoryBlobStore::new(), "other");
        storage.save(&board);

        assert!(storage.store().get(SNAPSHOT_KEY).is_none());
        assert!(storage.store().get("other").is_some());
        assert_eq!(storage.load().unwrap(), board);
    }
}
