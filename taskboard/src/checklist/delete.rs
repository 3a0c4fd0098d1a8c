//! DeleteChecklist command

use crate::context::{BoardContext, LatencyKind};
use crate::error::{BoardError, Result};
use crate::processor::logged;
use crate::types::{BoardId, ChecklistId, TaskId};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::time::Instant;
use taskboard_operations::{async_trait, operation, Execute, ExecutionResult};

/// Remove a checklist from a task. An unknown checklist id only touches the task.
#[operation(verb = "delete", noun = "checklist", description = "Delete a checklist from a task")]
#[derive(Debug, Deserialize, Serialize)]
pub struct DeleteChecklist {
    /// The board ID
    pub board_id: BoardId,
    /// The task owning the checklist
    pub task_id: TaskId,
    /// The checklist ID
    pub id: ChecklistId,
}

impl DeleteChecklist {
    pub fn new(
        board_id: impl Into<BoardId>,
        task_id: impl Into<TaskId>,
        id: impl Into<ChecklistId>,
    ) -> Self {
        Self {
            board_id: board_id.into(),
            task_id: task_id.into(),
            id: id.into(),
        }
    }
}

#[async_trait]
impl Execute<BoardContext, BoardError> for DeleteChecklist {
    async fn execute(&self, ctx: &BoardContext) -> ExecutionResult<Value, BoardError> {
        let start = Instant::now();

        let result: Result<Value> = async {
            ctx.simulate_latency(LatencyKind::Default).await;

            let now = ctx.timestamp();
            let mut store = ctx.write().await;
            let task = store.require_task_mut(self.board_id, &self.task_id)?;

            let before = task.checklists.len();
            task.checklists.retain(|c| c.id != self.id);
            let deleted = task.checklists.len() < before;
            task.updated_at = now;

            Ok(json!({ "deleted": deleted, "id": self.id }))
        }
        .await;

        logged(self, start, result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::Latency;

    #[tokio::test]
    async fn test_delete_checklist() {
        let ctx = BoardContext::seeded(Latency::none());
        DeleteChecklist::new(1u64, "task-2", "checklist-2")
            .execute(&ctx)
            .await
            .into_result()
            .unwrap();

        let tasks = ctx.read_tasks(BoardId::new(1)).await;
        let task = &tasks[&TaskId::from("task-2")];
        assert!(task.checklists.is_empty());
        assert_ne!(task.updated_at, task.created_at);
    }

    #[tokio::test]
    async fn test_delete_checklist_twice() {
        let ctx = BoardContext::seeded(Latency::none());
        let op = DeleteChecklist::new(1u64, "task-2", "checklist-2");
        let value = op.execute(&ctx).await.into_result().unwrap();
        assert_eq!(value["deleted"], true);

        let value = op.execute(&ctx).await.into_result().unwrap();
        assert_eq!(value["deleted"], false);
        assert_eq!(value["id"], "checklist-2");
    }

    #[tokio::test]
    async fn test_delete_unknown_checklist_touches_task() {
        let ctx = BoardContext::seeded(Latency::none());
        let value = DeleteChecklist::new(1u64, "task-1", "checklist-404")
            .execute(&ctx)
            .await
            .into_result()
            .unwrap();
        assert_eq!(value["deleted"], false);

        let tasks = ctx.read_tasks(BoardId::new(1)).await;
        let task = &tasks[&TaskId::from("task-1")];
        assert_eq!(task.checklists.len(), 1);
        assert_ne!(task.updated_at, task.created_at);
    }

    #[tokio::test]
    async fn test_delete_checklist_missing_task() {
        let ctx = BoardContext::seeded(Latency::none());
        let result = DeleteChecklist::new(1u64, "task-404", "checklist-1")
            .execute(&ctx)
            .await
            .into_result();
        assert!(matches!(result, Err(BoardError::TaskNotFound { .. })));
    }
}
