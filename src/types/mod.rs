//! Core types for the kanban store

mod board;
mod ids;
mod reference;

// Re-export all types
pub use board::{Board, Column, Task};
pub use ids::{ColumnId, TaskId};
pub use reference::TaskRef;
