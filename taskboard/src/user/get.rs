//! GetCurrentUser, GetUser and GetUsers commands

use crate::context::{BoardContext, LatencyKind};
use crate::error::{BoardError, Result};
use crate::processor::unlogged;
use crate::types::UserId;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use taskboard_operations::{async_trait, operation, Execute, ExecutionResult};

/// The acting user. Without real sign-in this is the first user on record.
#[operation(verb = "get", noun = "current user", description = "Retrieve the current user")]
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GetCurrentUser;

#[async_trait]
impl Execute<BoardContext, BoardError> for GetCurrentUser {
    async fn execute(&self, ctx: &BoardContext) -> ExecutionResult<Value, BoardError> {
        let result: Result<Value> = async {
            ctx.simulate_latency(LatencyKind::Default).await;
            let store = ctx.read().await;
            let user = store
                .users
                .first()
                .ok_or_else(|| BoardError::user_not_found("current"))?;
            Ok(serde_json::to_value(user)?)
        }
        .await;

        unlogged(result)
    }
}

/// Get a single user by ID
#[operation(verb = "get", noun = "user", description = "Retrieve a user by ID")]
#[derive(Debug, Deserialize, Serialize)]
pub struct GetUser {
    /// The user ID
    pub id: UserId,
}

impl GetUser {
    pub fn new(id: impl Into<UserId>) -> Self {
        Self { id: id.into() }
    }
}

#[async_trait]
impl Execute<BoardContext, BoardError> for GetUser {
    async fn execute(&self, ctx: &BoardContext) -> ExecutionResult<Value, BoardError> {
        let result: Result<Value> = async {
            ctx.simulate_latency(LatencyKind::Default).await;
            let store = ctx.read().await;
            let user = store
                .user(&self.id)
                .ok_or_else(|| BoardError::user_not_found(&self.id))?;
            Ok(serde_json::to_value(user)?)
        }
        .await;

        unlogged(result)
    }
}

/// Get the users among `ids`, in user-table order. Unknown ids are skipped.
#[operation(verb = "get", noun = "users", description = "Retrieve several users by ID")]
#[derive(Debug, Deserialize, Serialize)]
pub struct GetUsers {
    /// The user IDs
    pub ids: Vec<UserId>,
}

impl GetUsers {
    pub fn new<I, U>(ids: I) -> Self
    where
        I: IntoIterator<Item = U>,
        U: Into<UserId>,
    {
        Self {
            ids: ids.into_iter().map(Into::into).collect(),
        }
    }
}

#[async_trait]
impl Execute<BoardContext, BoardError> for GetUsers {
    async fn execute(&self, ctx: &BoardContext) -> ExecutionResult<Value, BoardError> {
        let result: Result<Value> = async {
            ctx.simulate_latency(LatencyKind::Default).await;
            let store = ctx.read().await;
            let users: Vec<_> = store
                .users
                .iter()
                .filter(|u| self.ids.contains(&u.id))
                .collect();
            Ok(serde_json::to_value(users)?)
        }
        .await;

        unlogged(result)
    }
}
