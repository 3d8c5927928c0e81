//! Built-in default board.
//!
//! Used when no snapshot exists yet, or when the persisted snapshot fails
//! validation and is discarded.

use crate::types::{Board, Column, Task};

/// The default three-column board with two seeded tasks
pub fn default_board() -> Board {
    Board::from_columns(vec![
        Column::new("todo", "To Do").with_tasks(vec![Task::with_id("task-1", "Write project plan")]),
        Column::new("inprogress", "In Progress")
            .with_tasks(vec![Task::with_id("task-2", "Build kanban board")]),
        Column::new("done", "Done"),
    ])
}
