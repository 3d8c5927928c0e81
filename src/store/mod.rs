//! BoardStateStore - the single owner and sole writer of board state
//!
//! Mutations are pure: each operation takes the current [`Board`] and
//! produces the next one (or `None` for a no-op), never mutating in place.
//! The store threads the latest board through sequential calls and notifies
//! its persistence subscribers after every accepted mutation, so callers get
//! unidirectional data flow with persistence as a plain subscriber rather
//! than an ambient effect.
//!
//! The store holds no drag-session state. Tracking which card is lifted
//! belongs to the rendering layer; the store only performs the single atomic
//! transition when a gesture resolves (see [`BoardStateStore::resolve_drag_end`]).

mod add;
mod delete;
mod edit;
mod mv;

pub use add::add_task;
pub use delete::delete_task;
pub use edit::edit_task;
pub use mv::move_task;

use crate::defaults::default_board;
use crate::gesture::{DragEnd, DropTarget};
use crate::storage::{BlobStore, SnapshotStorage};
use crate::types::{Board, ColumnId, TaskRef};

/// Callback invoked with the new board after each accepted mutation
type Subscriber = Box<dyn FnMut(&Board)>;

/// Owns the kanban board and applies mutations to it.
///
/// All mutation methods return `true` when the board changed and `false` for
/// a silent no-op, mirroring the `Option<Board>` contract of the underlying
/// pure operations.
pub struct BoardStateStore {
    board: Board,
    subscribers: Vec<Subscriber>,
}

impl BoardStateStore {
    /// Create a store around an existing board
    pub fn new(board: Board) -> Self {
        Self {
            board,
            subscribers: Vec::new(),
        }
    }

    /// Create a store from the persisted snapshot, falling back to the
    /// built-in default board when no valid snapshot exists
    pub fn load_or_default<S: BlobStore>(storage: &SnapshotStorage<S>) -> Self {
        Self::new(storage.load().unwrap_or_else(default_board))
    }

    /// The current board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Register a subscriber to be called after every accepted mutation
    pub fn subscribe(&mut self, subscriber: impl FnMut(&Board) + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    /// Add a task to the front of the named column
    pub fn add_task(&mut self, column_id: &ColumnId, content: impl Into<String>) -> bool {
        let next = add::add_task(&self.board, column_id, content);
        self.commit(next)
    }

    /// Replace the referenced task's content (trimmed; empty edits rejected)
    pub fn edit_task(&mut self, task_ref: &TaskRef, new_content: &str) -> bool {
        let next = edit::edit_task(&self.board, task_ref, new_content);
        self.commit(next)
    }

    /// Remove the referenced task
    pub fn delete_task(&mut self, task_ref: &TaskRef) -> bool {
        let next = delete::delete_task(&self.board, task_ref);
        self.commit(next)
    }

    /// Move a task within or across columns
    pub fn move_task(
        &mut self,
        source: &TaskRef,
        dest_column: &ColumnId,
        before: Option<&TaskRef>,
    ) -> bool {
        let next = mv::move_task(&self.board, source, dest_column, before);
        self.commit(next)
    }

    /// Resolve a finished drag gesture into at most one move.
    ///
    /// A drop outside any target (`over` is `None`) cancels the gesture. A
    /// drop on a task inserts the dragged task in front of it; a drop on a
    /// column appends to that column.
    pub fn resolve_drag_end(&mut self, event: &DragEnd) -> bool {
        match &event.over {
            None => false,
            Some(DropTarget::Column(column)) => self.move_task(&event.active, column, None),
            Some(DropTarget::Task(target)) => {
                let dest = target.column.clone();
                self.move_task(&event.active, &dest, Some(target))
            }
        }
    }

    /// Install `next` as the current board and notify subscribers.
    /// `None` means the mutation was a no-op and nothing is persisted.
    fn commit(&mut self, next: Option<Board>) -> bool {
        match next {
            Some(board) => {
                self.board = board;
                for subscriber in &mut self.subscribers {
                    subscriber(&self.board);
                }
                true
            }
            None => false,
        }
    }
}
