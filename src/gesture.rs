//! Drag gesture events consumed from the rendering layer.
//!
//! The gesture library reports element ids as strings: tasks as composite
//! `column:task` keys, columns as bare column ids. [`DropTarget::parse`]
//! converts those at the boundary so the rest of the crate works with
//! structured references only.
//!
//! The gesture lifecycle is Idle -> Dragging -> Resolving. The first two
//! states live entirely in the rendering layer; the store only sees the
//! resolving step as a single [`DragEnd`] event.

use crate::error::Result;
use crate::types::{ColumnId, TaskRef};

/// A drag began: `active` identifies the lifted task
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragStart {
    pub active: TaskRef,
}

/// What the pointer was over when the drag ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropTarget {
    /// Dropped on a specific task; the dragged task is inserted before it
    Task(TaskRef),
    /// Dropped on a column itself; the dragged task is appended
    Column(ColumnId),
}

impl DropTarget {
    /// Parse a gesture-library element ID.
    ///
    /// Ids containing `:` are composite task keys; anything else is a column
    /// id. Whether the id actually resolves on the board is decided later by
    /// the move operation, which treats unknown targets as no-ops.
    pub fn parse(raw: &str) -> Result<Self> {
        if raw.contains(':') {
            Ok(Self::Task(raw.parse()?))
        } else {
            Ok(Self::Column(ColumnId::from_string(raw)))
        }
    }
}

/// A drag ended. `over: None` means the drop landed outside any target and
/// the gesture is treated as cancelled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragEnd {
    pub active: TaskRef,
    pub over: Option<DropTarget>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_task_target() {
        let target = DropTarget::parse("todo:task-1").unwrap();
        assert_eq!(target, DropTarget::Task(TaskRef::new("todo", "task-1")));
    }

    #[test]
    fn test_parse_column_target() {
        let target = DropTarget::parse("done").unwrap();
        assert_eq!(target, DropTarget::Column(ColumnId::from_string("done")));
    }

    #[test]
    fn test_parse_malformed_task_key_errors() {
        assert!(DropTarget::parse("todo:").is_err());
        assert!(DropTarget::parse(":task-1").is_err());
    }
}
