//! Column commands

mod add;
mod delete;
mod list;
mod replace;

pub use add::AddColumn;
pub use delete::DeleteColumn;
pub use list::{ColumnWithTasks, ListColumnTasks, ListColumns};
pub use replace::ReplaceColumns;
