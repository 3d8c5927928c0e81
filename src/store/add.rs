//! Add a task to a column

use crate::types::{Board, ColumnId, Task};

/// Prepend a freshly minted task to the named column.
///
/// Returns the next board, or `None` when the column does not exist. Content
/// is stored as given; trimming and empty-input guards belong to the caller,
/// so the store stays usable for seeding and import paths that want exact
/// text.
pub fn add_task(board: &Board, column_id: &ColumnId, content: impl Into<String>) -> Option<Board> {
    if !board.columns.contains_key(column_id) {
        tracing::debug!(column = %column_id, "add_task ignored: unknown column");
        return None;
    }

    let mut next = board.clone();
    let column = next.columns.get_mut(column_id)?;
    column.tasks.insert(0, Task::new(content));
    Some(next)
}
