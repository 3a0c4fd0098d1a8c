//! DeleteTask command

use crate::context::{BoardContext, LatencyKind};
use crate::error::{BoardError, Result};
use crate::processor::logged;
use crate::types::{BoardId, ColumnId, TaskId};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::time::Instant;
use taskboard_operations::{async_trait, operation, Execute, ExecutionResult};
use tracing::info;

/// Delete a task and drop it from the column listing it
#[operation(verb = "delete", noun = "task", description = "Delete a task from a column")]
#[derive(Debug, Deserialize, Serialize)]
pub struct DeleteTask {
    /// The board ID
    pub board_id: BoardId,
    /// The task ID
    pub task_id: TaskId,
    /// Column listing the task
    pub column_id: ColumnId,
}

impl DeleteTask {
    pub fn new(
        board_id: impl Into<BoardId>,
        task_id: impl Into<TaskId>,
        column_id: impl Into<ColumnId>,
    ) -> Self {
        Self {
            board_id: board_id.into(),
            task_id: task_id.into(),
            column_id: column_id.into(),
        }
    }
}

#[async_trait]
impl Execute<BoardContext, BoardError> for DeleteTask {
    async fn execute(&self, ctx: &BoardContext) -> ExecutionResult<Value, BoardError> {
        let start = Instant::now();

        let result: Result<Value> = async {
            ctx.simulate_latency(LatencyKind::Default).await;

            let mut store = ctx.write().await;
            store.require_task(self.board_id, &self.task_id)?;

            let column = store
                .require_columns_mut(self.board_id)?
                .iter_mut()
                .find(|c| c.id == self.column_id)
                .ok_or_else(|| BoardError::column_not_found(self.column_id))?;
            let index = column
                .task_ids
                .iter()
                .position(|id| id == &self.task_id)
                .ok_or_else(|| BoardError::TaskNotInColumn {
                    task: self.task_id.to_string(),
                    column: self.column_id.to_string(),
                })?;
            column.task_ids.remove(index);

            if let Some(tasks) = store.tasks.get_mut(&self.board_id) {
                tasks.shift_remove(&self.task_id);
            }

            info!(board_id = %self.board_id, task = %self.task_id, "deleted task");
            Ok(json!({ "deleted": true, "id": self.task_id }))
        }
        .await;

        logged(self, start, result)
    }
}
