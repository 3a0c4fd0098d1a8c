//! AddComment command

use crate::context::{BoardContext, LatencyKind};
use crate::error::{BoardError, Result};
use crate::processor::logged;
use crate::types::{BoardId, Comment, TaskId, UserId};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Instant;
use taskboard_operations::{async_trait, operation, Execute, ExecutionResult};

/// Comment on a task
#[operation(verb = "add", noun = "comment", description = "Add a comment to a task")]
#[derive(Debug, Deserialize, Serialize)]
pub struct AddComment {
    /// The board ID
    pub board_id: BoardId,
    /// The task being commented on
    pub task_id: TaskId,
    /// Comment body
    pub text: String,
    /// The commenting user
    pub author: UserId,
}

impl AddComment {
    pub fn new(
        board_id: impl Into<BoardId>,
        task_id: impl Into<TaskId>,
        text: impl Into<String>,
        author: impl Into<UserId>,
    ) -> Self {
        Self {
            board_id: board_id.into(),
            task_id: task_id.into(),
            text: text.into(),
            author: author.into(),
        }
    }
}

#[async_trait]
impl Execute<BoardContext, BoardError> for AddComment {
    async fn execute(&self, ctx: &BoardContext) -> ExecutionResult<Value, BoardError> {
        let start = Instant::now();

        let result: Result<Value> = async {
            ctx.simulate_latency(LatencyKind::Default).await;

            let comment = Comment::new(self.text.clone(), self.author.clone(), ctx.timestamp());
            let mut store = ctx.write().await;
            let task = store.require_task_mut(self.board_id, &self.task_id)?;

            // the task's last update is the comment itself
            task.updated_at = comment.created_at.clone();
            let value = serde_json::to_value(&comment)?;
            task.comments.push(comment);

            Ok(value)
        }
        .await;

        logged(self, start, result)
    }
}
