//! Board membership commands

use crate::context::{BoardContext, LatencyKind};
use crate::error::{BoardError, Result};
use crate::processor::{logged, unlogged};
use crate::types::{BoardId, User, UserId};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Instant;
use taskboard_operations::{async_trait, operation, Execute, ExecutionResult};
use tracing::info;

/// List the users that are members of a board, in user-table order
#[operation(verb = "list", noun = "members", description = "List the members of a board")]
#[derive(Debug, Deserialize, Serialize)]
pub struct ListBoardMembers {
    /// The board ID
    pub board_id: BoardId,
}

impl ListBoardMembers {
    pub fn new(board_id: impl Into<BoardId>) -> Self {
        Self {
            board_id: board_id.into(),
        }
    }
}

#[async_trait]
impl Execute<BoardContext, BoardError> for ListBoardMembers {
    async fn execute(&self, ctx: &BoardContext) -> ExecutionResult<Value, BoardError> {
        let result: Result<Value> = async {
            ctx.simulate_latency(LatencyKind::Default).await;

            let store = ctx.read().await;
            let board = store.require_board(self.board_id)?;
            let members: Vec<&User> = store
                .users
                .iter()
                .filter(|u| board.is_member(&u.id))
                .collect();
            Ok(serde_json::to_value(members)?)
        }
        .await;

        unlogged(result)
    }
}

/// Add a user to a board; adding an existing member changes nothing
#[operation(verb = "add", noun = "member", description = "Add a member to a board")]
#[derive(Debug, Deserialize, Serialize)]
pub struct AddBoardMember {
    /// The board ID
    pub board_id: BoardId,
    /// The user to add
    pub user_id: UserId,
}

impl AddBoardMember {
    pub fn new(board_id: impl Into<BoardId>, user_id: impl Into<UserId>) -> Self {
        Self {
            board_id: board_id.into(),
            user_id: user_id.into(),
        }
    }
}

#[async_trait]
impl Execute<BoardContext, BoardError> for AddBoardMember {
    async fn execute(&self, ctx: &BoardContext) -> ExecutionResult<Value, BoardError> {
        let start = Instant::now();

        let result: Result<Value> = async {
            ctx.simulate_latency(LatencyKind::Default).await;

            let now = ctx.timestamp();
            let mut store = ctx.write().await;
            let board = store.require_board_mut(self.board_id)?;

            if !board.is_member(&self.user_id) {
                board.members.push(self.user_id.clone());
                board.last_activity = now;
                info!(board_id = %self.board_id, user = %self.user_id, "added member");
            }

            Ok(serde_json::to_value(&*board)?)
        }
        .await;

        logged(self, start, result)
    }
}

/// Remove a user from a board. The owner cannot be removed.
#[operation(verb = "remove", noun = "member", description = "Remove a member from a board")]
#[derive(Debug, Deserialize, Serialize)]
pub struct RemoveBoardMember {
    /// The board ID
    pub board_id: BoardId,
    /// The user to remove
    pub user_id: UserId,
}

impl RemoveBoardMember {
    pub fn new(board_id: impl Into<BoardId>, user_id: impl Into<UserId>) -> Self {
        Self {
            board_id: board_id.into(),
            user_id: user_id.into(),
        }
    }
}

#[async_trait]
impl Execute<BoardContext, BoardError> for RemoveBoardMember {
    async fn execute(&self, ctx: &BoardContext) -> ExecutionResult<Value, BoardError> {
        let start = Instant::now();

        let result: Result<Value> = async {
            ctx.simulate_latency(LatencyKind::Default).await;

            let now = ctx.timestamp();
            let mut store = ctx.write().await;
            let board = store.require_board_mut(self.board_id)?;

            if board.owner == self.user_id {
                return Err(BoardError::CannotRemoveOwner {
                    user: self.user_id.to_string(),
                });
            }

            board.members.retain(|m| m != &self.user_id);
            board.last_activity = now;
            Ok(serde_json::to_value(&*board)?)
        }
        .await;

        logged(self, start, result)
    }
}

/// Hand a board to another of its members
#[operation(
    verb = "transfer",
    noun = "ownership",
    description = "Make another member the board owner"
)]
#[derive(Debug, Deserialize, Serialize)]
pub struct TransferOwnership {
    /// The board ID
    pub board_id: BoardId,
    /// The member who becomes owner
    pub new_owner: UserId,
}

impl TransferOwnership {
    pub fn new(board_id: impl Into<BoardId>, new_owner: impl Into<UserId>) -> Self {
        Self {
            board_id: board_id.into(),
            new_owner: new_owner.into(),
        }
    }
}

#[async_trait]
impl Execute<BoardContext, BoardError> for TransferOwnership {
    async fn execute(&self, ctx: &BoardContext) -> ExecutionResult<Value, BoardError> {
        let start = Instant::now();

        let result: Result<Value> = async {
            ctx.simulate_latency(LatencyKind::Default).await;

            let now = ctx.timestamp();
            let mut store = ctx.write().await;
            let board = store.require_board_mut(self.board_id)?;

            if !board.is_member(&self.new_owner) {
                return Err(BoardError::NotAMember {
                    user: self.new_owner.to_string(),
                    board: self.board_id.to_string(),
                });
            }

            board.owner = self.new_owner.clone();
            board.last_activity = now;
            info!(board_id = %self.board_id, owner = %self.new_owner, "transferred ownership");
            Ok(serde_json::to_value(&*board)?)
        }
        .await;

        logged(self, start, result)
    }
}
