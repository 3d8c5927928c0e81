//! Board-level types: Board, Column, Task

use super::ids::{ColumnId, TaskId};
use super::reference::TaskRef;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A task/card on the kanban board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub content: String,
}

impl Task {
    /// Create a new task with a freshly minted ID
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            id: TaskId::new(),
            content: content.into(),
        }
    }

    /// Create a task with an explicit ID (snapshots, seeded defaults)
    pub fn with_id(id: impl Into<TaskId>, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            content: content.into(),
        }
    }
}

/// A column: a named, ordered bucket of tasks. Task order is display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub id: ColumnId,
    pub title: String,
    pub tasks: Vec<Task>,
}

impl Column {
    /// Create an empty column
    pub fn new(id: impl Into<ColumnId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            tasks: Vec::new(),
        }
    }

    /// Set the initial tasks
    pub fn with_tasks(mut self, tasks: Vec<Task>) -> Self {
        self.tasks = tasks;
        self
    }

    /// Index of a task within this column's list
    pub fn position_of(&self, id: &TaskId) -> Option<usize> {
        self.tasks.iter().position(|t| &t.id == id)
    }

    /// Find a task in this column by ID
    pub fn find_task(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| &t.id == id)
    }
}

/// The full kanban state: columns plus their display order.
///
/// `column_order` determines display order and must be a permutation of the
/// keys of `columns`. Serializes to the `{ "columns": {...},
/// "columnOrder": [...] }` snapshot shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Board {
    pub columns: IndexMap<ColumnId, Column>,
    pub column_order: Vec<ColumnId>,
}

impl Board {
    /// Build a board from columns, deriving `column_order` from their order
    pub fn from_columns(columns: Vec<Column>) -> Self {
        let column_order = columns.iter().map(|c| c.id.clone()).collect();
        let columns = columns.into_iter().map(|c| (c.id.clone(), c)).collect();
        Self {
            columns,
            column_order,
        }
    }

    /// Find a column by ID
    pub fn find_column(&self, id: &ColumnId) -> Option<&Column> {
        self.columns.get(id)
    }

    /// Resolve a task reference to the task it names
    pub fn find_task(&self, task_ref: &TaskRef) -> Option<&Task> {
        self.columns.get(&task_ref.column)?.find_task(&task_ref.task)
    }

    /// Columns in display order. Ids without a `columns` entry are skipped.
    pub fn ordered_columns(&self) -> impl Iterator<Item = &Column> {
        self.column_order
            .iter()
            .filter_map(|id| self.columns.get(id))
    }

    /// Total number of tasks across all columns
    pub fn task_count(&self) -> usize {
        self.columns.values().map(|c| c.tasks.len()).sum()
    }

    /// Whether any column holds a task with this ID
    pub fn contains_task(&self, id: &TaskId) -> bool {
        self.columns.values().any(|c| c.find_task(id).is_some())
    }
}
