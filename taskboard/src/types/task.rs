//! Task types: Task, Priority, Comment, Checklist

use super::ids::{ChecklistId, ChecklistItemId, CommentId, TaskId, UserId};
use super::timestamp::Timestamp;
use serde::{Deserialize, Serialize};

/// A task carrying this label color counts as blocked
pub const BLOCKING_LABEL: &str = "#EB5A46";

/// Task priority. Any other value read from data is kept as `Unrecognized`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
    #[serde(other)]
    Unrecognized,
}

/// A card on the board
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    #[serde(default)]
    pub assigned_members: Vec<UserId>,
    /// Label color codes
    #[serde(default)]
    pub labels: Vec<String>,
    /// Estimate in hours
    #[serde(default)]
    pub time_estimation: f64,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub blocked: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_reason: Option<String>,
    #[serde(default)]
    pub checklists: Vec<Checklist>,
    #[serde(default)]
    pub comments: Vec<Comment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<UserId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<Timestamp>,
}

impl Task {
    /// A new open task; `updated_at` starts equal to `created_at`
    pub fn new(title: impl Into<String>, now: Timestamp) -> Self {
        Self {
            id: TaskId::new(),
            title: title.into(),
            description: String::new(),
            priority: None,
            due_date: None,
            assigned_members: Vec::new(),
            labels: Vec::new(),
            time_estimation: 0.0,
            completed: false,
            blocked: false,
            block_reason: None,
            checklists: Vec::new(),
            comments: Vec::new(),
            created_by: None,
            updated_at: now.clone(),
            created_at: now,
            completed_at: None,
        }
    }

    pub fn with_id(mut self, id: impl Into<TaskId>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn with_estimate(mut self, hours: f64) -> Self {
        self.time_estimation = hours;
        self
    }

    pub fn with_members<I, U>(mut self, members: I) -> Self
    where
        I: IntoIterator<Item = U>,
        U: Into<UserId>,
    {
        self.assigned_members = members.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.labels = labels.into_iter().map(Into::into).collect();
        self
    }

    /// Mark completed at `at`
    pub fn mark_completed(mut self, at: Timestamp) -> Self {
        self.completed = true;
        self.completed_at = Some(at);
        self
    }

    pub fn mark_blocked(mut self) -> Self {
        self.blocked = true;
        self
    }

    pub fn updated(mut self, at: Timestamp) -> Self {
        self.updated_at = at;
        self
    }

    /// Blocked flag set, or the blocking label attached
    pub fn is_blocked(&self) -> bool {
        self.blocked || self.labels.iter().any(|l| l == BLOCKING_LABEL)
    }

    /// Estimate counted towards completed work, 0 when open
    pub fn completed_estimate(&self) -> f64 {
        if self.completed {
            self.time_estimation
        } else {
            0.0
        }
    }

    pub fn find_checklist_mut(&mut self, id: &ChecklistId) -> Option<&mut Checklist> {
        self.checklists.iter_mut().find(|c| &c.id == id)
    }

    /// Add members, skipping ones already assigned
    pub fn assign<I>(&mut self, members: I)
    where
        I: IntoIterator<Item = UserId>,
    {
        for member in members {
            if !self.assigned_members.contains(&member) {
                self.assigned_members.push(member);
            }
        }
    }
}

/// A comment on a task
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: CommentId,
    pub text: String,
    pub author: UserId,
    pub created_at: Timestamp,
}

impl Comment {
    pub fn new(text: impl Into<String>, author: impl Into<UserId>, created_at: Timestamp) -> Self {
        Self {
            id: CommentId::new(),
            text: text.into(),
            author: author.into(),
            created_at,
        }
    }
}

/// A named list of check items
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Checklist {
    pub id: ChecklistId,
    pub title: String,
    #[serde(default)]
    pub items: Vec<ChecklistItem>,
}

impl Checklist {
    /// (total, completed) item counts
    pub fn progress(&self) -> (usize, usize) {
        let done = self.items.iter().filter(|i| i.completed).count();
        (self.items.len(), done)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChecklistItem {
    pub id: ChecklistItemId,
    pub text: String,
    #[serde(default)]
    pub completed: bool,
}

impl ChecklistItem {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: ChecklistItemId::new(),
            text: text.into(),
            completed: false,
        }
    }
}
