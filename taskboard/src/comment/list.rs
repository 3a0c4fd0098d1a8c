//! ListComments command

use crate::context::{BoardContext, LatencyKind};
use crate::error::{BoardError, Result};
use crate::processor::unlogged;
use crate::types::{BoardId, TaskId};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use taskboard_operations::{async_trait, operation, Execute, ExecutionResult};

/// List the comments on a task, oldest first
#[operation(verb = "list", noun = "comments", description = "List the comments on a task")]
#[derive(Debug, Deserialize, Serialize)]
pub struct ListComments {
    /// The board ID
    pub board_id: BoardId,
    /// The task ID
    pub task_id: TaskId,
}

impl ListComments {
    pub fn new(board_id: impl Into<BoardId>, task_id: impl Into<TaskId>) -> Self {
        Self {
            board_id: board_id.into(),
            task_id: task_id.into(),
        }
    }
}

#[async_trait]
impl Execute<BoardContext, BoardError> for ListComments {
    async fn execute(&self, ctx: &BoardContext) -> ExecutionResult<Value, BoardError> {
        let result: Result<Value> = async {
            ctx.simulate_latency(LatencyKind::Default).await;
            let store = ctx.read().await;
            let task = store.require_task(self.board_id, &self.task_id)?;
            Ok(serde_json::to_value(&task.comments)?)
        }
        .await;

        unlogged(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::Latency;

    #[tokio::test]
    async fn test_list_comments() {
        let ctx = BoardContext::seeded(Latency::none());
        let value = ListComments::new(1u64, "task-8")
            .execute(&ctx)
            .await
            .into_result()
            .unwrap();
        assert_eq!(value.as_array().unwrap().len(), 1);
        assert_eq!(value[0]["id"], "comment-8-1");

        let value = ListComments::new(1u64, "task-1")
            .execute(&ctx)
            .await
            .into_result()
            .unwrap();
        assert_eq!(value, serde_json::json!([]));
    }
}
