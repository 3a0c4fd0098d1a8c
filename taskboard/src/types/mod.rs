//! Core types for the taskboard engine

mod board;
mod ids;
mod task;
mod timestamp;

pub use board::{Board, Column, Label, User, DEFAULT_BACKGROUND, DEFAULT_LABEL_COLORS};
pub use ids::{BoardId, ChecklistId, ChecklistItemId, ColumnId, CommentId, LabelId, TaskId, UserId};
pub use task::{Checklist, ChecklistItem, Comment, Priority, Task, BLOCKING_LABEL};
pub use timestamp::Timestamp;
