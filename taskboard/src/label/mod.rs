//! Label commands
//!
//! A board without custom labels exposes [`Label::defaults`]. The first
//! change to a board's labels starts from those defaults.

mod add;
mod delete;
mod list;
mod replace;

pub use add::AddLabel;
pub use delete::DeleteLabel;
pub use list::ListLabels;
pub use replace::ReplaceLabels;

use crate::context::Store;
use crate::types::{BoardId, Label};

/// Labels a board currently exposes
fn labels_of(store: &Store, board: BoardId) -> Vec<Label> {
    store
        .labels
        .get(&board)
        .cloned()
        .unwrap_or_else(Label::defaults)
}

/// Custom label list of a board, seeded from the defaults on first use
fn labels_mut(store: &mut Store, board: BoardId) -> &mut Vec<Label> {
    store.labels.entry(board).or_insert_with(Label::defaults)
}
