//! ListChecklists command

use crate::context::{BoardContext, LatencyKind};
use crate::error::{BoardError, Result};
use crate::processor::unlogged;
use crate::types::{BoardId, TaskId};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use taskboard_operations::{async_trait, operation, Execute, ExecutionResult};

/// List the checklists of a task
#[operation(verb = "list", noun = "checklists", description = "List the checklists of a task")]
#[derive(Debug, Deserialize, Serialize)]
pub struct ListChecklists {
    /// The board ID
    pub board_id: BoardId,
    /// The task ID
    pub task_id: TaskId,
}

impl ListChecklists {
    pub fn new(board_id: impl Into<BoardId>, task_id: impl Into<TaskId>) -> Self {
        Self {
            board_id: board_id.into(),
            task_id: task_id.into(),
        }
    }
}

#[async_trait]
impl Execute<BoardContext, BoardError> for ListChecklists {
    async fn execute(&self, ctx: &BoardContext) -> ExecutionResult<Value, BoardError> {
        let result: Result<Value> = async {
            ctx.simulate_latency(LatencyKind::Default).await;
            let store = ctx.read().await;
            let task = store.require_task(self.board_id, &self.task_id)?;
            Ok(serde_json::to_value(&task.checklists)?)
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
    async fn test_list_checklists() {
        let ctx = BoardContext::seeded(Latency::none());
        let value = ListChecklists::new(1u64, "task-4")
            .execute(&ctx)
            .await
            .into_result()
            .unwrap();
        assert_eq!(value[0]["id"], "checklist-4");
        assert_eq!(value[0]["items"][0]["completed"], true);
    }
}
