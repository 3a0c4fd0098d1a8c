//! GetBoard and ListBoards commands

use crate::context::{BoardContext, LatencyKind};
use crate::error::{BoardError, Result};
use crate::processor::unlogged;
use crate::types::BoardId;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use taskboard_operations::{async_trait, operation, Execute, ExecutionResult};

/// List every board
#[operation(verb = "list", noun = "boards", description = "List all boards")]
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ListBoards;

#[async_trait]
impl Execute<BoardContext, BoardError> for ListBoards {
    async fn execute(&self, ctx: &BoardContext) -> ExecutionResult<Value, BoardError> {
        let result: Result<Value> = async {
            ctx.simulate_latency(LatencyKind::Default).await;
            let store = ctx.read().await;
            Ok(serde_json::to_value(&store.boards)?)
        }
        .await;

        unlogged(result)
    }
}

/// Get a board together with its columns
#[operation(verb = "get", noun = "board", description = "Retrieve a board and its columns")]
#[derive(Debug, Deserialize, Serialize)]
pub struct GetBoard {
    /// The board ID
    pub id: BoardId,
}

impl GetBoard {
    pub fn new(id: impl Into<BoardId>) -> Self {
        Self { id: id.into() }
    }
}

#[async_trait]
impl Execute<BoardContext, BoardError> for GetBoard {
    async fn execute(&self, ctx: &BoardContext) -> ExecutionResult<Value, BoardError> {
        let result: Result<Value> = async {
            ctx.simulate_latency(LatencyKind::Default).await;

            let store = ctx.read().await;
            let board = store.require_board(self.id)?;
            let columns = store.columns.get(&self.id).cloned().unwrap_or_default();

            let mut value = serde_json::to_value(board)?;
            value["columns"] = serde_json::to_value(columns)?;
            Ok(value)
        }
        .await;

        unlogged(result)
    }
}
