//! Error types for the kanban store
//!
//! Board mutations never error: unresolvable references are silent no-ops so
//! that stray drag targets cannot break the UI. Errors exist only at the
//! edges, where snapshots are decoded and composite drag keys are parsed.

use thiserror::Error;

/// Result type for kanban store operations
pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors that can occur at the store's boundaries
#[derive(Debug, Error)]
pub enum StoreError {
    /// Composite drag key that is not `column:task`
    #[error("invalid task reference: {key}")]
    InvalidTaskRef { key: String },

    /// Persisted snapshot failed structural validation
    #[error("invalid board snapshot: {reason}")]
    InvalidSnapshot { reason: String },

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl StoreError {
    /// Create an invalid-snapshot error
    pub fn invalid_snapshot(reason: impl Into<String>) -> Self {
        Self::InvalidSnapshot {
            reason: reason.into(),
        }
    }
}
