//! Comment commands

mod add;
mod delete;
mod list;

pub use add::AddComment;
pub use delete::DeleteComment;
pub use list::ListComments;
