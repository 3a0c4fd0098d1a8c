//! UpdateChecklist command

use super::{build_items, ItemInput};
use crate::context::{BoardContext, LatencyKind};
use crate::error::{BoardError, Result};
use crate::processor::logged;
use crate::types::{BoardId, ChecklistId, TaskId};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Instant;
use taskboard_operations::{async_trait, operation, Execute, ExecutionResult};

/// Rename a checklist and/or replace its items
#[operation(verb = "update", noun = "checklist", description = "Update a checklist's title or items")]
#[derive(Debug, Deserialize, Serialize)]
pub struct UpdateChecklist {
    /// The board ID
    pub board_id: BoardId,
    /// The task owning the checklist
    pub task_id: TaskId,
    /// The checklist ID
    pub id: ChecklistId,
    /// New title
    pub title: Option<String>,
    /// Replacement items
    pub items: Option<Vec<ItemInput>>,
}

impl UpdateChecklist {
    pub fn new(
        board_id: impl Into<BoardId>,
        task_id: impl Into<TaskId>,
        id: impl Into<ChecklistId>,
    ) -> Self {
        Self {
            board_id: board_id.into(),
            task_id: task_id.into(),
            id: id.into(),
            title: None,
            items: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_items(mut self, items: Vec<ItemInput>) -> Self {
        self.items = Some(items);
        self
    }
}

#[async_trait]
impl Execute<BoardContext, BoardError> for UpdateChecklist {
    async fn execute(&self, ctx: &BoardContext) -> ExecutionResult<Value, BoardError> {
        let start = Instant::now();

        let result: Result<Value> = async {
            ctx.simulate_latency(LatencyKind::Default).await;

            let now = ctx.timestamp();
            let mut store = ctx.write().await;
            let task = store.require_task_mut(self.board_id, &self.task_id)?;
            let checklist = task.find_checklist_mut(&self.id).ok_or_else(|| {
                BoardError::ChecklistNotFound {
                    id: self.id.to_string(),
                }
            })?;

            if let Some(title) = &self.title {
                checklist.title = title.clone();
            }
            if let Some(items) = &self.items {
                checklist.items = build_items(items);
            }
            let value = serde_json::to_value(&*checklist)?;
            task.updated_at = now;

            Ok(value)
        }
        .await;

        logged(self, start, result)
    }
}
