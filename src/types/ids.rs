//! ID wrapper types for type-safe identifiers.
//!
//! Strongly typed wrappers prevent mixing up column and task identifiers.
//! Both are plain strings on the wire: persisted boards carry whatever ids
//! they were saved with (e.g. `task-1`), while freshly created tasks get a
//! ULID-based id from [`TaskId::new`].

use serde::{Deserialize, Serialize};
use ulid::Ulid;

/// Identifies a column on the board.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColumnId(String);

impl ColumnId {
    /// Create a column ID from an existing string
    pub fn from_string(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Get the ID as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ColumnId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ColumnId {
    fn from(s: &str) -> Self {
        Self::from_string(s)
    }
}

impl From<String> for ColumnId {
    fn from(s: String) -> Self {
        Self::from_string(s)
    }
}

/// Identifies a task anywhere on the board.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(String);

impl TaskId {
    /// Mint a fresh, globally unique task ID
    pub fn new() -> Self {
        Self(Ulid::new().to_string())
    }

    /// Create a task ID from an existing string
    pub fn from_string(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Get the ID as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for TaskId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for TaskId {
    fn from(s: &str) -> Self {
        Self::from_string(s)
    }
}

impl From<String> for TaskId {
    fn from(s: String) -> Self {
        Self::from_string(s)
    }
}
