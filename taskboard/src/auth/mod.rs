//! Mock authentication: a single demo account and a stored session

mod login;
mod logout;
mod session;

pub use login::Login;
pub use logout::Logout;
pub use session::{MemorySessionStorage, SessionStorage, AUTH_TOKEN_KEY, USER_KEY};

use crate::context::BoardContext;
use serde::{Deserialize, Serialize};

/// Claims encoded into the session token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionToken {
    pub id: u64,
    pub email: String,
    pub name: String,
}

/// Profile of the signed-in user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub email: String,
    pub name: String,
}

/// Whether a session token is present
pub fn is_authenticated(ctx: &BoardContext) -> bool {
    ctx.session()
        .get(AUTH_TOKEN_KEY)
        .is_some_and(|token| !token.is_empty())
}

/// The stored profile, or `None` without a session or when it fails to parse
pub fn current_session_user(ctx: &BoardContext) -> Option<SessionUser> {
    let raw = ctx.session().get(USER_KEY)?;
    serde_json::from_str(&raw).ok()
}
