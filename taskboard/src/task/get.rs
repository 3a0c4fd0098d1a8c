//! GetTask command

use crate::context::{BoardContext, LatencyKind};
use crate::error::{BoardError, Result};
use crate::processor::unlogged;
use crate::types::{BoardId, TaskId};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use taskboard_operations::{async_trait, operation, Execute, ExecutionResult};

/// Get a single task by ID
#[operation(verb = "get", noun = "task", description = "Retrieve a task by ID")]
#[derive(Debug, Deserialize, Serialize)]
pub struct GetTask {
    /// The board ID
    pub board_id: BoardId,
    /// The task ID
    pub id: TaskId,
}

impl GetTask {
    pub fn new(board_id: impl Into<BoardId>, id: impl Into<TaskId>) -> Self {
        Self {
            board_id: board_id.into(),
            id: id.into(),
        }
    }
}

#[async_trait]
impl Execute<BoardContext, BoardError> for GetTask {
    async fn execute(&self, ctx: &BoardContext) -> ExecutionResult<Value, BoardError> {
        let result: Result<Value> = async {
            ctx.simulate_latency(LatencyKind::Default).await;
            let store = ctx.read().await;
            let task = store.require_task(self.board_id, &self.id)?;
            Ok(serde_json::to_value(task)?)
        }
        .await;

        unlogged(result)
    }
}
