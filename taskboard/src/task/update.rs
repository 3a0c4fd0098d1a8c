//! UpdateTask command

use crate::context::{BoardContext, LatencyKind};
use crate::error::{BoardError, Result};
use crate::processor::logged;
use crate::types::{BoardId, Priority, TaskId, UserId};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Instant;
use taskboard_operations::{async_trait, operation, Execute, ExecutionResult};

/// Patch a task. Only the fields that are set change.
#[operation(verb = "update", noun = "task", description = "Update fields of a task")]
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct UpdateTask {
    /// The board ID
    pub board_id: BoardId,
    /// The task ID
    pub id: TaskId,
    /// New title
    pub title: Option<String>,
    /// New description
    pub description: Option<String>,
    /// New priority
    pub priority: Option<Priority>,
    /// New due date
    pub due_date: Option<String>,
    /// Replacement assignee list
    pub assigned_members: Option<Vec<UserId>>,
    /// Replacement label colors
    pub labels: Option<Vec<String>>,
    /// New estimate in hours
    pub time_estimation: Option<f64>,
    /// Mark completed or reopen
    pub completed: Option<bool>,
    /// Set or clear the blocked flag
    pub blocked: Option<bool>,
    /// Why the task is blocked
    pub block_reason: Option<String>,
}

impl UpdateTask {
    pub fn new(board_id: impl Into<BoardId>, id: impl Into<TaskId>) -> Self {
        Self {
            board_id: board_id.into(),
            id: id.into(),
            ..Self::default()
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn with_members(mut self, members: Vec<UserId>) -> Self {
        self.assigned_members = Some(members);
        self
    }

    pub fn with_labels(mut self, labels: Vec<String>) -> Self {
        self.labels = Some(labels);
        self
    }

    pub fn with_estimate(mut self, hours: f64) -> Self {
        self.time_estimation = Some(hours);
        self
    }

    pub fn with_completed(mut self, completed: bool) -> Self {
        self.completed = Some(completed);
        self
    }

    pub fn with_blocked(mut self, blocked: bool) -> Self {
        self.blocked = Some(blocked);
        self
    }
}

#[async_trait]
impl Execute<BoardContext, BoardError> for UpdateTask {
    async fn execute(&self, ctx: &BoardContext) -> ExecutionResult<Value, BoardError> {
        let start = Instant::now();

        let result: Result<Value> = async {
            ctx.simulate_latency(LatencyKind::Default).await;

            let now = ctx.timestamp();
            let mut store = ctx.write().await;
            let task = store.require_task_mut(self.board_id, &self.id)?;

            if let Some(title) = &self.title {
                task.title = title.clone();
            }
            if let Some(description) = &self.description {
                task.description = description.clone();
            }
            if let Some(priority) = self.priority {
                task.priority = Some(priority);
            }
            if let Some(due_date) = &self.due_date {
                task.due_date = Some(due_date.clone());
            }
            if let Some(members) = &self.assigned_members {
                task.assigned_members.clear();
                task.assign(members.iter().cloned());
            }
            if let Some(labels) = &self.labels {
                task.labels = labels.clone();
            }
            if let Some(hours) = self.time_estimation {
                task.time_estimation = hours;
            }
            match self.completed {
                Some(true) => {
                    task.completed = true;
                    if task.completed_at.is_none() {
                        task.completed_at = Some(now.clone());
                    }
                }
                Some(false) => {
                    task.completed = false;
                    task.completed_at = None;
                }
                None => {}
            }
            if let Some(blocked) = self.blocked {
                task.blocked = blocked;
            }
            if let Some(reason) = &self.block_reason {
                task.block_reason = Some(reason.clone());
            }
            task.updated_at = now;

            Ok(serde_json::to_value(&*task)?)
        }
        .await;

        logged(self, start, result)
    }
}
