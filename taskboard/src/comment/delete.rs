//! DeleteComment command

use crate::context::{BoardContext, LatencyKind};
use crate::error::{BoardError, Result};
use crate::processor::logged;
use crate::types::{BoardId, CommentId, TaskId};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::time::Instant;
use taskboard_operations::{async_trait, operation, Execute, ExecutionResult};

/// Remove a comment from a task
#[operation(verb = "delete", noun = "comment", description = "Delete a comment from a task")]
#[derive(Debug, Deserialize, Serialize)]
pub struct DeleteComment {
    /// The board ID
    pub board_id: BoardId,
    /// The task owning the comment
    pub task_id: TaskId,
    /// The comment ID
    pub id: CommentId,
}

impl DeleteComment {
    pub fn new(
        board_id: impl Into<BoardId>,
        task_id: impl Into<TaskId>,
        id: impl Into<CommentId>,
    ) -> Self {
        Self {
            board_id: board_id.into(),
            task_id: task_id.into(),
            id: id.into(),
        }
    }
}

#[async_trait]
impl Execute<BoardContext, BoardError> for DeleteComment {
    async fn execute(&self, ctx: &BoardContext) -> ExecutionResult<Value, BoardError> {
        let start = Instant::now();

        let result: Result<Value> = async {
            ctx.simulate_latency(LatencyKind::Default).await;

            let now = ctx.timestamp();
            let mut store = ctx.write().await;
            let task = store.require_task_mut(self.board_id, &self.task_id)?;

            let index = task
                .comments
                .iter()
                .position(|c| c.id == self.id)
                .ok_or_else(|| BoardError::CommentNotFound {
                    id: self.id.to_string(),
                })?;
            task.comments.remove(index);
            task.updated_at = now;

            Ok(json!({ "deleted": true, "id": self.id }))
        }
        .await;

        logged(self, start, result)
    }
}
