//! Board-level types: Board, Column, User, Label

use super::ids::{BoardId, ColumnId, LabelId, TaskId, UserId};
use super::timestamp::Timestamp;
use serde::{Deserialize, Serialize};

/// Background used when a board is created without one
pub const DEFAULT_BACKGROUND: &str = "#1a1a2e";

/// Label colors every board offers until it defines its own labels
pub const DEFAULT_LABEL_COLORS: [&str; 6] = [
    "#61BD4F", // green
    "#F2D600", // yellow
    "#FF9F1A", // orange
    "#EB5A46", // red, also marks a task as blocked
    "#C377E0", // purple
    "#0079BF", // blue
];

/// A shared workspace of columns and tasks
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Board {
    pub id: BoardId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_background")]
    pub background_color: String,
    pub owner: UserId,
    #[serde(default)]
    pub members: Vec<UserId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
    pub last_activity: Timestamp,
}

fn default_background() -> String {
    DEFAULT_BACKGROUND.to_string()
}

impl Board {
    /// A board owned by `owner`, who is also its only member
    pub fn new(id: BoardId, title: impl Into<String>, owner: UserId, now: Timestamp) -> Self {
        Self {
            id,
            title: title.into(),
            description: String::new(),
            background_color: default_background(),
            members: vec![owner.clone()],
            owner,
            created_at: Some(now.clone()),
            last_activity: now,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn is_member(&self, user: &UserId) -> bool {
        self.members.contains(user)
    }

    /// Columns a freshly created board starts with
    pub fn default_columns() -> Vec<Column> {
        vec![
            Column::new(1u64, "To Do"),
            Column::new(2u64, "In Progress"),
            Column::new(3u64, "Done"),
        ]
    }
}

/// An ordered bucket of task references.
///
/// The title doubles as a soft classification key: analytics treat a column
/// whose title mentions "progress" as in-progress and one titled "completed"
/// as the completed column.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    pub id: ColumnId,
    pub title: String,
    #[serde(default)]
    pub task_ids: Vec<TaskId>,
}

impl Column {
    pub fn new(id: impl Into<ColumnId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            task_ids: Vec::new(),
        }
    }

    pub fn with_tasks<I, T>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<TaskId>,
    {
        self.task_ids = ids.into_iter().map(Into::into).collect();
        self
    }

    pub fn contains(&self, task: &TaskId) -> bool {
        self.task_ids.contains(task)
    }

    /// Case-insensitive substring match on the title
    pub fn title_contains(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
    }

    /// Case-insensitive equality on the title
    pub fn title_is(&self, name: &str) -> bool {
        self.title.to_lowercase() == name
    }
}

/// A team member
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub name: String,
    #[serde(default)]
    pub avatar: String,
    #[serde(default)]
    pub role: String,
}

impl User {
    /// A user with a generated initials avatar
    pub fn new(id: impl Into<UserId>, name: impl Into<String>, role: impl Into<String>) -> Self {
        let name = name.into();
        let avatar = format!(
            "https://ui-avatars.com/api/?name={}&background=random",
            name.replace(' ', "+")
        );
        Self {
            id: id.into(),
            name,
            avatar,
            role: role.into(),
        }
    }
}

/// A named color used to categorize tasks; tasks carry the color code
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Label {
    pub id: LabelId,
    pub name: String,
    pub color: String,
}

impl Label {
    pub fn new(id: impl Into<LabelId>, name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            color: color.into(),
        }
    }

    /// The labels a board without custom labels exposes; id, name and color
    /// are all the color code
    pub fn defaults() -> Vec<Label> {
        DEFAULT_LABEL_COLORS
            .iter()
            .map(|color| Label::new(*color, *color, *color))
            .collect()
    }
}
