//! Kanban task board with an in-memory store and board analytics
//!
//! Boards hold ordered columns, columns list task ids, and tasks carry
//! priorities, estimates, assignees, labels, checklists and comments. Every
//! command is an operation struct run against a [`BoardContext`]; mutations
//! produce an activity [`LogEntry`] that a [`BoardOperationProcessor`] records.
//!
//! ## Basic Usage
//!
//! ```rust,no_run
//! use taskboard::{analytics::ComputeBoardStats, task::AddTask, BoardContext, Execute, Latency};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let ctx = BoardContext::seeded(Latency::none());
//!
//! let task = AddTask::new(1u64, 1u64, "Write release notes")
//!     .with_estimate(3.0)
//!     .execute(&ctx)
//!     .await
//!     .into_result()?;
//! println!("Created task: {}", task["id"]);
//!
//! let stats = ComputeBoardStats::new(1u64).compute(&ctx).await;
//! println!("{} of {} tasks done", stats.completed_tasks, stats.total_tasks);
//! # Ok(())
//! # }
//! ```
//!
//! ## Analytics
//!
//! - [`analytics::ComputeBoardStats`]: counts, completion rate, per-member,
//!   per-column and priority breakdowns, time totals and recent activity
//! - [`analytics::ComputeVelocityMetrics`]: completed work bucketed by week,
//!   average time spent per column
//! - [`analytics::GetBoardTimeline`]: creation, comment, completion and
//!   update events, newest first

pub mod clock;
mod context;
mod error;
mod processor;
pub mod seed;
pub mod types;

// Command modules
pub mod activity;
pub mod analytics;
pub mod assist;
pub mod auth;
pub mod board;
pub mod checklist;
pub mod column;
pub mod comment;
pub mod label;
pub mod task;
pub mod user;

// Re-export Execute trait and types from operations crate
pub use taskboard_operations::{
    async_trait, Execute, ExecutionResult, LogEntry, Operation, OperationProcessor,
};

pub use context::{BoardContext, BoardSnapshot, Latency, LatencyKind, Store};
pub use error::{BoardError, Result};
pub use processor::BoardOperationProcessor;

// Re-export commonly used types
pub use types::{
    Board, BoardId, Checklist, ChecklistId, ChecklistItem, ChecklistItemId, Column, ColumnId,
    Comment, CommentId, Label, LabelId, Priority, Task, TaskId, Timestamp, User, UserId,
};
