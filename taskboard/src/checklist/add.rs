//! AddChecklist command

use super::{build_items, ItemInput};
use crate::context::{BoardContext, LatencyKind};
use crate::error::{BoardError, Result};
use crate::processor::logged;
use crate::types::{BoardId, Checklist, ChecklistId, TaskId};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Instant;
use taskboard_operations::{async_trait, operation, Execute, ExecutionResult};

/// Attach a new checklist to a task
#[operation(verb = "add", noun = "checklist", description = "Add a checklist to a task")]
#[derive(Debug, Deserialize, Serialize)]
pub struct AddChecklist {
    /// The board ID
    pub board_id: BoardId,
    /// The task receiving the checklist
    pub task_id: TaskId,
    /// Checklist title
    pub title: String,
    /// Initial items
    #[serde(default)]
    pub items: Vec<ItemInput>,
}

impl AddChecklist {
    pub fn new(
        board_id: impl Into<BoardId>,
        task_id: impl Into<TaskId>,
        title: impl Into<String>,
    ) -> Self {
        Self {
            board_id: board_id.into(),
            task_id: task_id.into(),
            title: title.into(),
            items: Vec::new(),
        }
    }

    pub fn with_items(mut self, items: Vec<ItemInput>) -> Self {
        self.items = items;
        self
    }
}

#[async_trait]
impl Execute<BoardContext, BoardError> for AddChecklist {
    async fn execute(&self, ctx: &BoardContext) -> ExecutionResult<Value, BoardError> {
        let start = Instant::now();

        let result: Result<Value> = async {
            ctx.simulate_latency(LatencyKind::Default).await;

            let now = ctx.timestamp();
            let mut store = ctx.write().await;
            let task = store.require_task_mut(self.board_id, &self.task_id)?;

            let checklist = Checklist {
                id: ChecklistId::new(),
                title: self.title.clone(),
                items: build_items(&self.items),
            };
            let value = serde_json::to_value(&checklist)?;
            task.checklists.push(checklist);
            task.updated_at = now;

            Ok(value)
        }
        .await;

        logged(self, start, result)
    }
}
