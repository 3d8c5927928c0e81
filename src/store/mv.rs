//! Move a task within or across columns
//!
//! This is the drop-resolution algorithm behind drag-and-drop. Every failure
//! path is a silent no-op: drag gestures routinely end over stale or invalid
//! targets, and the board must shrug those off rather than error.

use crate::types::{Board, ColumnId, TaskRef};

/// Move the task named by `source` into `dest_column`.
///
/// When `before` names a task currently present in the destination column,
/// the moved task is inserted in front of it. When `before` is `None` (the
/// drop landed on the column itself) or names a task that is no longer there,
/// the task goes to the end of the list.
///
/// Returns `None` when nothing changed: unresolvable source, unknown
/// destination column, a drop onto the task itself, or a same-column move
/// that reproduces the existing order.
pub fn move_task(
    board: &Board,
    source: &TaskRef,
    dest_column: &ColumnId,
    before: Option<&TaskRef>,
) -> Option<Board> {
    let source_column = board.columns.get(&source.column)?;
    let source_index = source_column.position_of(&source.task)?;

    if !board.columns.contains_key(dest_column) {
        tracing::debug!(column = %dest_column, "move_task ignored: unknown destination");
        return None;
    }

    // A drop onto the dragged task itself is a gesture artifact, not a move.
    if before.is_some_and(|target| target.task == source.task) {
        return None;
    }

    let mut next = board.clone();

    if &source.column == dest_column {
        // Reorder within one column. The removal shifts later indices, so the
        // insertion point is resolved against the already-shrunk list.
        let column = next.columns.get_mut(dest_column)?;
        let moved = column.tasks.remove(source_index);
        let insert_at = before
            .and_then(|target| column.position_of(&target.task))
            .unwrap_or(column.tasks.len());
        column.tasks.insert(insert_at, moved);

        if column.tasks == source_column.tasks {
            return None;
        }
    } else {
        let moved = next.columns.get_mut(&source.column)?.tasks.remove(source_index);
        let column = next.columns.get_mut(dest_column)?;
        let insert_at = before
            .and_then(|target| column.position_of(&target.task))
            .unwrap_or(column.tasks.len());
        column.tasks.insert(insert_at, moved);
    }

    Some(next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defaults::default_board;
    use crate::types::{Column, Task};

    fn board_with_ordered_todo() -> Board {
        Board::from_columns(vec![
            Column::new("todo", "To Do").with_tasks(vec![
                Task::with_id("a", "a"),
                Task::with_id("b", "b"),
                Task::with_id("c", "c"),
            ]),
            Column::new("done", "Done").with_tasks(vec![Task::with_id("d", "d")]),
        ])
    }

    fn ids(board: &Board, column: &str) -> Vec<String> {
        board
            .find_column(&ColumnId::from_string(column))
            .unwrap()
            .tasks
            .iter()
            .map(|t| t.id.as_str().to_string())
            .collect()
    }

    #[test]
    fn test_cross_column_move_to_column_end() {
        let board = default_board();
        let next = move_task(
            &board,
            &TaskRef::new("todo", "task-1"),
            &ColumnId::from_string("done"),
            None,
        )
        .unwrap();

        assert!(ids(&next, "todo").is_empty());
        assert_eq!(ids(&next, "done"), vec!["task-1"]);
        assert_eq!(ids(&next, "inprogress"), vec!["task-2"]);
        assert_eq!(next.task_count(), board.task_count());
    }

    #[test]
    fn test_cross_column_insert_before_target() {
        let board = board_with_ordered_todo();
        let next = move_task(
            &board,
            &TaskRef::new("todo", "b"),
            &ColumnId::from_string("done"),
            Some(&TaskRef::new("done", "d")),
        )
        .unwrap();

        assert_eq!(ids(&next, "todo"), vec!["a", "c"]);
        assert_eq!(ids(&next, "done"), vec!["b", "d"]);
    }

    #[test]
    fn test_same_column_reorder_forward() {
        // Moving "a" before "c": removal shrinks the list first, so the
        // resolved index accounts for the shift.
        let board = board_with_ordered_todo();
        let next = move_task(
            &board,
            &TaskRef::new("todo", "a"),
            &ColumnId::from_string("todo"),
            Some(&TaskRef::new("todo", "c")),
        )
        .unwrap();

        assert_eq!(ids(&next, "todo"), vec!["b", "a", "c"]);
    }

    #[test]
    fn test_same_column_reorder_backward() {
        let board = board_with_ordered_todo();
        let next = move_task(
            &board,
            &TaskRef::new("todo", "c"),
            &ColumnId::from_string("todo"),
            Some(&TaskRef::new("todo", "a")),
        )
        .unwrap();

        assert_eq!(ids(&next, "todo"), vec!["c", "a", "b"]);
    }

    #[test]
    fn test_same_column_drop_on_column_moves_to_end() {
        let board = board_with_ordered_todo();
        let next = move_task(
            &board,
            &TaskRef::new("todo", "a"),
            &ColumnId::from_string("todo"),
            None,
        )
        .unwrap();

        assert_eq!(ids(&next, "todo"), vec!["b", "c", "a"]);
    }

    #[test]
    fn test_drop_on_self_is_noop() {
        let board = board_with_ordered_todo();
        let result = move_task(
            &board,
            &TaskRef::new("todo", "b"),
            &ColumnId::from_string("todo"),
            Some(&TaskRef::new("todo", "b")),
        );
        assert!(result.is_none());
    }

    #[test]
    fn test_move_reproducing_existing_order_is_noop() {
        // "c" is already last; dropping it on the column changes nothing.
        let board = board_with_ordered_todo();
        let result = move_task(
            &board,
            &TaskRef::new("todo", "c"),
            &ColumnId::from_string("todo"),
            None,
        );
        assert!(result.is_none());
    }

    #[test]
    fn test_stale_target_falls_back_to_end() {
        let board = board_with_ordered_todo();
        let next = move_task(
            &board,
            &TaskRef::new("todo", "a"),
            &ColumnId::from_string("done"),
            Some(&TaskRef::new("done", "gone")),
        )
        .unwrap();

        assert_eq!(ids(&next, "done"), vec!["d", "a"]);
    }

    #[test]
    fn test_unresolvable_source_is_noop() {
        let board = board_with_ordered_todo();
        let done = ColumnId::from_string("done");
        assert!(move_task(&board, &TaskRef::new("todo", "zz"), &done, None).is_none());
        assert!(move_task(&board, &TaskRef::new("archive", "a"), &done, None).is_none());
    }

    #[test]
    fn test_unknown_destination_is_noop() {
        let board = board_with_ordered_todo();
        let result = move_task(
            &board,
            &TaskRef::new("todo", "a"),
            &ColumnId::from_string("archive"),
            None,
        );
        assert!(result.is_none());
    }

    #[test]
    fn test_move_conserves_tasks() {
        let board = board_with_ordered_todo();
        let next = move_task(
            &board,
            &TaskRef::new("done", "d"),
            &ColumnId::from_string("todo"),
            Some(&TaskRef::new("todo", "b")),
        )
        .unwrap();

        assert_eq!(next.task_count(), board.task_count());
        assert_eq!(ids(&next, "todo"), vec!["a", "d", "b", "c"]);
        assert!(ids(&next, "done").is_empty());
    }
}
