//! ListColumns and ListColumnTasks commands

use crate::context::{BoardContext, LatencyKind};
use crate::error::{BoardError, Result};
use crate::processor::unlogged;
use crate::types::{BoardId, ColumnId, Task, TaskId};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use taskboard_operations::{async_trait, operation, Execute, ExecutionResult};

/// List a board's columns; an unknown board has none
#[operation(verb = "list", noun = "columns", description = "List the columns of a board")]
#[derive(Debug, Deserialize, Serialize)]
pub struct ListColumns {
    /// The board ID
    pub board_id: BoardId,
}

impl ListColumns {
    pub fn new(board_id: impl Into<BoardId>) -> Self {
        Self {
            board_id: board_id.into(),
        }
    }
}

#[async_trait]
impl Execute<BoardContext, BoardError> for ListColumns {
    async fn execute(&self, ctx: &BoardContext) -> ExecutionResult<Value, BoardError> {
        let result: Result<Value> = async {
            ctx.simulate_latency(LatencyKind::Default).await;
            Ok(serde_json::to_value(ctx.read_columns(self.board_id).await)?)
        }
        .await;

        unlogged(result)
    }
}

/// A column with its task ids resolved to tasks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnWithTasks {
    pub id: ColumnId,
    pub title: String,
    pub task_ids: Vec<TaskId>,
    pub tasks: Vec<Task>,
}

/// List a board's columns with their tasks
#[operation(
    verb = "list",
    noun = "column tasks",
    description = "List the columns of a board with their tasks"
)]
#[derive(Debug, Deserialize, Serialize)]
pub struct ListColumnTasks {
    /// The board ID
    pub board_id: BoardId,
}

impl ListColumnTasks {
    pub fn new(board_id: impl Into<BoardId>) -> Self {
        Self {
            board_id: board_id.into(),
        }
    }
}

#[async_trait]
impl Execute<BoardContext, BoardError> for ListColumnTasks {
    async fn execute(&self, ctx: &BoardContext) -> ExecutionResult<Value, BoardError> {
        let result: Result<Value> = async {
            ctx.simulate_latency(LatencyKind::Default).await;

            let mut columns = Vec::new();
            for column in ctx.read_columns(self.board_id).await {
                let tasks = ctx.read_tasks_for_column(self.board_id, &column).await;
                columns.push(ColumnWithTasks {
                    id: column.id,
                    title: column.title,
                    task_ids: column.task_ids,
                    tasks,
                });
            }
            Ok(serde_json::to_value(columns)?)
        }
        .await;

        unlogged(result)
    }
}
