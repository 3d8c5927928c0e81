//! Kanban board state engine with snapshot persistence
//!
//! This crate owns the data model behind a drag-and-drop kanban board:
//! columns hold ordered tasks, tasks are created, edited, deleted, and moved
//! within or across columns, and the whole board round-trips through a single
//! JSON blob in a key/value store so state survives reloads.
//!
//! ## Overview
//!
//! - **One value, pure mutations** - every operation takes the current
//!   [`Board`] and produces the next one; `None` means the input produced no
//!   actionable change
//! - **Drag-tolerant** - unresolvable columns, stale task references, and
//!   drops outside any target are silent no-ops, never errors
//! - **Persistence as a subscriber** - [`BoardStateStore`] publishes each
//!   accepted board to its subscribers; [`SnapshotStorage`] saves and
//!   validates the blob
//! - **Structured references** - composite `column:task` drag keys are parsed
//!   only at the gesture boundary ([`gesture::DropTarget::parse`]); the core
//!   never parses strings
//!
//! ## Basic Usage
//!
//! ```rust
//! use kanban_store::{BoardStateStore, ColumnId, MemoryBlobStore, SnapshotStorage, TaskRef};
//!
//! let storage = SnapshotStorage::new(MemoryBlobStore::new());
//! let mut store = BoardStateStore::load_or_default(&storage);
//!
//! let todo = ColumnId::from_string("todo");
//! store.add_task(&todo, "Write the docs");
//!
//! // Drag "task-1" from todo onto the done column
//! let moved = store.move_task(
//!     &TaskRef::new("todo", "task-1"),
//!     &ColumnId::from_string("done"),
//!     None,
//! );
//! assert!(moved);
//! ```

pub mod defaults;
mod error;
pub mod gesture;
pub mod storage;
pub mod store;
pub mod types;

pub use defaults::default_board;
pub use error::{Result, StoreError};
pub use gesture::{DragEnd, DragStart, DropTarget};
pub use storage::{BlobStore, MemoryBlobStore, SnapshotStorage, SNAPSHOT_KEY};
pub use store::BoardStateStore;

// Re-export commonly used types
pub use types::{Board, Column, ColumnId, Task, TaskId, TaskRef};
