//! MoveTask command

use crate::context::{BoardContext, LatencyKind};
use crate::error::{BoardError, Result};
use crate::processor::logged;
use crate::types::{BoardId, ColumnId, TaskId};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Instant;
use taskboard_operations::{async_trait, operation, Execute, ExecutionResult};
use tracing::debug;

/// Move a task from one column to the end of another
#[operation(verb = "move", noun = "task", description = "Move a task between columns")]
#[derive(Debug, Deserialize, Serialize)]
pub struct MoveTask {
    /// The board ID
    pub board_id: BoardId,
    /// The task ID
    pub task_id: TaskId,
    /// Column currently listing the task
    pub from: ColumnId,
    /// Column that receives the task
    pub to: ColumnId,
}

impl MoveTask {
    pub fn new(
        board_id: impl Into<BoardId>,
        task_id: impl Into<TaskId>,
        from: impl Into<ColumnId>,
        to: impl Into<ColumnId>,
    ) -> Self {
        Self {
            board_id: board_id.into(),
            task_id: task_id.into(),
            from: from.into(),
            to: to.into(),
        }
    }
}

#[async_trait]
impl Execute<BoardContext, BoardError> for MoveTask {
    async fn execute(&self, ctx: &BoardContext) -> ExecutionResult<Value, BoardError> {
        let start = Instant::now();

        let result: Result<Value> = async {
            ctx.simulate_latency(LatencyKind::Default).await;

            let now = ctx.timestamp();
            let mut store = ctx.write().await;
            let columns = store.require_columns_mut(self.board_id)?;

            let from = columns
                .iter()
                .position(|c| c.id == self.from)
                .ok_or_else(|| BoardError::column_not_found(self.from))?;
            let to = columns
                .iter()
                .position(|c| c.id == self.to)
                .ok_or_else(|| BoardError::column_not_found(self.to))?;
            let index = columns[from]
                .task_ids
                .iter()
                .position(|id| id == &self.task_id)
                .ok_or_else(|| BoardError::task_not_found(&self.task_id))?;
            // a dangling id must not move
            store.require_task(self.board_id, &self.task_id)?;

            let columns = store.require_columns_mut(self.board_id)?;
            let id = columns[from].task_ids.remove(index);
            columns[to].task_ids.push(id);

            let task = store.require_task_mut(self.board_id, &self.task_id)?;
            task.updated_at = now;

            debug!(task = %self.task_id, from = %self.from, to = %self.to, "moved task");
            Ok(serde_json::to_value(&*task)?)
        }
        .await;

        logged(self, start, result)
    }
}
