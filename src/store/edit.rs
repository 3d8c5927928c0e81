//! Edit a task's content in place

use crate::types::{Board, TaskRef};

/// Replace the referenced task's content with the trimmed new text.
///
/// The task keeps its position. Returns `None` when the trimmed content is
/// empty (the edit is rejected and the prior content stands) or when the
/// reference does not resolve.
pub fn edit_task(board: &Board, task_ref: &TaskRef, new_content: &str) -> Option<Board> {
    let content = new_content.trim();
    if content.is_empty() {
        tracing::debug!(task = %task_ref, "edit_task ignored: empty content");
        return None;
    }

    let column = board.columns.get(&task_ref.column)?;
    let index = column.position_of(&task_ref.task)?;

    let mut next = board.clone();
    next.columns.get_mut(&task_ref.column)?.tasks[index].content = content.to_string();
    Some(next)
}
