//! Board commands

mod activity;
mod add;
mod delete;
mod get;
mod members;
mod update;

pub use activity::{BoardActivity, GetBoardActivity};
pub use add::AddBoard;
pub use delete::DeleteBoard;
pub use get::{GetBoard, ListBoards};
pub use members::{AddBoardMember, ListBoardMembers, RemoveBoardMember, TransferOwnership};
pub use update::UpdateBoard;
