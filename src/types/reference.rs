//! Structured task references.
//!
//! The gesture library identifies draggable cards with composite string keys
//! (`"column:task"`). Those strings are parsed here, at the UI boundary; the
//! store itself only ever sees structured [`TaskRef`] values.

use super::ids::{ColumnId, TaskId};
use crate::error::StoreError;
use std::fmt;
use std::str::FromStr;

/// Reference to a task: the column it lives in plus the task's own ID
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TaskRef {
    pub column: ColumnId,
    pub task: TaskId,
}

impl TaskRef {
    /// Create a reference from column and task IDs
    pub fn new(column: impl Into<ColumnId>, task: impl Into<TaskId>) -> Self {
        Self {
            column: column.into(),
            task: task.into(),
        }
    }
}

impl fmt::Display for TaskRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.column, self.task)
    }
}

impl FromStr for TaskRef {
    type Err = StoreError;

    /// Parse a composite `column:task` drag key
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once(':') {
            Some((column, task)) if !column.is_empty() && !task.is_empty() => {
                Ok(Self::new(column, task))
            }
            _ => Err(StoreError::InvalidTaskRef { key: s.to_string() }),
        }
    }
}
