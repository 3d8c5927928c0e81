//! Delete a task from its column

use crate::types::{Board, TaskRef};

/// Remove the referenced task from its column's list.
///
/// Returns `None` when the column or task is not found, which makes repeated
/// deletes of the same reference idempotent.
pub fn delete_task(board: &Board, task_ref: &TaskRef) -> Option<Board> {
    let column = board.columns.get(&task_ref.column)?;
    let index = column.position_of(&task_ref.task)?;

    let mut next = board.clone();
    next.columns.get_mut(&task_ref.column)?.tasks.remove(index);
    Some(next)
}
