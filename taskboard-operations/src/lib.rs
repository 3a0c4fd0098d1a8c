//! # Taskboard Operations
//!
//! Every taskboard command is a plain struct whose fields are its parameters.
//! The `#[operation]` attribute names it (`verb` + `noun`), and an `Execute`
//! impl runs it against a context.
//!
//! ## Example
//!
//! ```ignore
//! use taskboard_operations::*;
//!
//! #[operation(verb = "add", noun = "comment", description = "Add a comment to a task")]
//! #[derive(Debug, Deserialize, Serialize)]
//! pub struct AddComment {
//!     /// The task to comment on
//!     pub task_id: TaskId,
//!     /// Comment text
//!     pub text: String,
//! }
//!
//! #[async_trait]
//! impl Execute<BoardContext, BoardError> for AddComment {
//!     async fn execute(&self, ctx: &BoardContext) -> ExecutionResult<Value, BoardError> {
//!         // mutations return ExecutionResult::Logged, reads ExecutionResult::Unlogged
//!     }
//! }
//! ```

mod execution_result;
mod log;
mod operation;
mod parameter;
mod processor;

pub use execution_result::ExecutionResult;
pub use log::LogEntry;
pub use operation::{Execute, Operation};
pub use parameter::{ParamMeta, ParamType};
pub use processor::OperationProcessor;

pub use taskboard_operations_macros::operation;

pub use async_trait::async_trait;
pub use serde_json::Value;
