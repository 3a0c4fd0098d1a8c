//! AddTask command

use crate::context::{BoardContext, LatencyKind};
use crate::error::{BoardError, Result};
use crate::processor::logged;
use crate::types::{BoardId, ColumnId, Priority, Task, UserId};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Instant;
use taskboard_operations::{async_trait, operation, Execute, ExecutionResult};
use tracing::info;

/// Add a new task at the end of a column
#[operation(verb = "add", noun = "task", description = "Create a new task in a column")]
#[derive(Debug, Deserialize, Serialize)]
pub struct AddTask {
    /// The board ID
    pub board_id: BoardId,
    /// The column that receives the task
    pub column_id: ColumnId,
    /// The task title (required)
    pub title: String,
    /// Detailed task description
    pub description: Option<String>,
    /// low, medium or high
    pub priority: Option<Priority>,
    /// Due date as written by the caller
    pub due_date: Option<String>,
    /// Assignees for this task
    #[serde(default)]
    pub assigned_members: Vec<UserId>,
    /// Label color codes
    #[serde(default)]
    pub labels: Vec<String>,
    /// Estimate in hours
    pub time_estimation: Option<f64>,
    /// The creating user
    pub created_by: Option<UserId>,
}

impl AddTask {
    pub fn new(
        board_id: impl Into<BoardId>,
        column_id: impl Into<ColumnId>,
        title: impl Into<String>,
    ) -> Self {
        Self {
            board_id: board_id.into(),
            column_id: column_id.into(),
            title: title.into(),
            description: None,
            priority: None,
            due_date: None,
            assigned_members: Vec::new(),
            labels: Vec::new(),
            time_estimation: None,
            created_by: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn with_estimate(mut self, hours: f64) -> Self {
        self.time_estimation = Some(hours);
        self
    }

    pub fn with_members(mut self, members: Vec<UserId>) -> Self {
        self.assigned_members = members;
        self
    }

    pub fn with_labels(mut self, labels: Vec<String>) -> Self {
        self.labels = labels;
        self
    }

    pub fn with_creator(mut self, user: impl Into<UserId>) -> Self {
        self.created_by = Some(user.into());
        self
    }
}

#[async_trait]
impl Execute<BoardContext, BoardError> for AddTask {
    async fn execute(&self, ctx: &BoardContext) -> ExecutionResult<Value, BoardError> {
        let start = Instant::now();

        let result: Result<Value> = async {
            ctx.simulate_latency(LatencyKind::Default).await;

            let mut task = Task::new(self.title.clone(), ctx.timestamp())
                .with_labels(self.labels.iter().cloned());
            task.description = self.description.clone().unwrap_or_default();
            task.priority = self.priority;
            task.due_date = self.due_date.clone();
            task.time_estimation = self.time_estimation.unwrap_or(0.0);
            task.created_by = self.created_by.clone();
            task.assign(self.assigned_members.iter().cloned());

            let value = serde_json::to_value(&task)?;
            let mut store = ctx.write().await;
            store.insert_task(self.board_id, self.column_id, task)?;

            info!(board_id = %self.board_id, column_id = %self.column_id, title = %self.title, "created task");
            Ok(value)
        }
        .await;

        logged(self, start, result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::Latency;
    use crate::types::TaskId;

    #[tokio::test]
    async fn test_add_task() {
        let ctx = BoardContext::seeded(Latency::none());
        let value = AddTask::new(1u64, 1u64, "Write release notes")
            .with_priority(Priority::Low)
            .with_estimate(2.5)
            .with_members(vec!["user-5".into(), "user-5".into()])
            .with_creator("user-1")
            .execute(&ctx)
            .await
            .into_result()
            .unwrap();

        let id = value["id"].as_str().unwrap();
        assert!(id.starts_with("task-"));
        assert_eq!(value["createdAt"], value["updatedAt"]);
        assert_eq!(value["completed"], false);
        assert_eq!(value["assignedMembers"], serde_json::json!(["user-5"]));
        assert_eq!(value["timeEstimation"], 2.5);

        let columns = ctx.read_columns(BoardId::new(1)).await;
        assert_eq!(columns[0].task_ids.last().unwrap().as_str(), id);
        assert!(ctx
            .read_tasks(BoardId::new(1))
            .await
            .contains_key(&TaskId::from(id)));
    }

    #[tokio::test]
    async fn test_add_task_defaults() {
        let ctx = BoardContext::seeded(Latency::none());
        let value = AddTask::new(1u64, 2u64, "Bare")
            .execute(&ctx)
            .await
            .into_result()
            .unwrap();
        assert_eq!(value["timeEstimation"], 0.0);
        assert_eq!(value["description"], "");
        assert!(value.get("priority").is_none());
    }

    #[tokio::test]
    async fn test_add_task_unknown_board_or_column() {
        let ctx = BoardContext::seeded(Latency::none());

        let result = AddTask::new(2u64, 1u64, "No columns")
            .execute(&ctx)
            .await
            .into_result();
        assert!(matches!(result, Err(BoardError::BoardNotFound { .. })));

        let result = AddTask::new(1u64, 99u64, "Nowhere")
            .execute(&ctx)
            .await
            .into_result();
        assert!(matches!(result, Err(BoardError::ColumnNotFound { .. })));
        assert_eq!(ctx.read_tasks(BoardId::new(1)).await.len(), 16);
    }
}
