//! Error types for the taskboard engine

use thiserror::Error;

/// Result type for taskboard operations
pub type Result<T> = std::result::Result<T, BoardError>;

/// Errors raised by board operations
#[derive(Debug, Error)]
pub enum BoardError {
    #[error("board not found: {id}")]
    BoardNotFound { id: String },

    #[error("column not found: {id}")]
    ColumnNotFound { id: String },

    #[error("task not found: {id}")]
    TaskNotFound { id: String },

    /// The task exists but is not listed in the given column
    #[error("task '{task}' not found in column {column}")]
    TaskNotInColumn { task: String, column: String },

    #[error("checklist not found: {id}")]
    ChecklistNotFound { id: String },

    #[error("comment not found: {id}")]
    CommentNotFound { id: String },

    #[error("user not found: {id}")]
    UserNotFound { id: String },

    #[error("cannot remove board owner '{user}'")]
    CannotRemoveOwner { user: String },

    /// Ownership can only move to an existing member
    #[error("user '{user}' is not a member of board {board}")]
    NotAMember { user: String, board: String },

    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl BoardError {
    pub fn board_not_found(id: impl ToString) -> Self {
        Self::BoardNotFound { id: id.to_string() }
    }

    pub fn column_not_found(id: impl ToString) -> Self {
        Self::ColumnNotFound { id: id.to_string() }
    }

    pub fn task_not_found(id: impl ToString) -> Self {
        Self::TaskNotFound { id: id.to_string() }
    }

    pub fn user_not_found(id: impl ToString) -> Self {
        Self::UserNotFound { id: id.to_string() }
    }

    /// Lookup failures, as opposed to rule violations
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::BoardNotFound { .. }
                | Self::ColumnNotFound { .. }
                | Self::TaskNotFound { .. }
                | Self::TaskNotInColumn { .. }
                | Self::ChecklistNotFound { .. }
                | Self::CommentNotFound { .. }
                | Self::UserNotFound { .. }
        )
    }
}
