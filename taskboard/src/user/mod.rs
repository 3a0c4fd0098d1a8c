//! User commands

mod get;
mod list;

pub use get::{GetCurrentUser, GetUser, GetUsers};
pub use list::{ListUsers, SearchUsers};
