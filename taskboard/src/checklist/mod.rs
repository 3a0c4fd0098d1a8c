//! Checklist commands

mod add;
mod delete;
mod list;
mod update;

pub use add::AddChecklist;
pub use delete::DeleteChecklist;
pub use list::ListChecklists;
pub use update::UpdateChecklist;

use crate::types::{ChecklistItem, ChecklistItemId};
use serde::{Deserialize, Serialize};

/// A checklist item as callers send it; the id is generated when missing
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ItemInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ChecklistItemId>,
    pub text: String,
    #[serde(default)]
    pub completed: bool,
}

impl ItemInput {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: None,
            text: text.into(),
            completed: false,
        }
    }

    pub fn done(mut self) -> Self {
        self.completed = true;
        self
    }

    fn into_item(self) -> ChecklistItem {
        ChecklistItem {
            id: self.id.unwrap_or_default(),
            text: self.text,
            completed: self.completed,
        }
    }
}

impl From<ChecklistItem> for ItemInput {
    fn from(item: ChecklistItem) -> Self {
        Self {
            id: Some(item.id),
            text: item.text,
            completed: item.completed,
        }
    }
}

fn build_items(items: &[ItemInput]) -> Vec<ChecklistItem> {
    items.iter().cloned().map(ItemInput::into_item).collect()
}
