//! AddBoard command

use crate::context::{BoardContext, LatencyKind};
use crate::error::{BoardError, Result};
use crate::processor::logged;
use crate::types::{Board, BoardId, UserId};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Instant;
use taskboard_operations::{async_trait, operation, Execute, ExecutionResult};
use tracing::info;

/// Create a board owned by the acting user
#[operation(verb = "add", noun = "board", description = "Create a new board with default columns")]
#[derive(Debug, Deserialize, Serialize)]
pub struct AddBoard {
    /// The board title
    pub title: String,
    /// Board description
    pub description: Option<String>,
    /// Background color, `#1a1a2e` when omitted
    pub background_color: Option<String>,
    /// The creating user, who becomes owner and first member
    pub owner: UserId,
}

impl AddBoard {
    pub fn new(title: impl Into<String>, owner: impl Into<UserId>) -> Self {
        Self {
            title: title.into(),
            description: None,
            background_color: None,
            owner: owner.into(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_background_color(mut self, color: impl Into<String>) -> Self {
        self.background_color = Some(color.into());
        self
    }
}

#[async_trait]
impl Execute<BoardContext, BoardError> for AddBoard {
    async fn execute(&self, ctx: &BoardContext) -> ExecutionResult<Value, BoardError> {
        let start = Instant::now();

        let result: Result<Value> = async {
            ctx.simulate_latency(LatencyKind::Default).await;

            let mut store = ctx.write().await;

            // ids come from the clock; step past any already taken
            let mut id = ctx.now().timestamp_millis().max(0) as u64;
            while store.board(BoardId::new(id)).is_some() {
                id += 1;
            }

            let mut board = Board::new(
                BoardId::new(id),
                self.title.clone(),
                self.owner.clone(),
                ctx.timestamp(),
            );
            if let Some(description) = &self.description {
                board.description = description.clone();
            }
            if let Some(color) = &self.background_color {
                board.background_color = color.clone();
            }

            store.columns.insert(board.id, Board::default_columns());
            store.boards.push(board.clone());

            info!(board_id = %board.id, title = %board.title, "created board");
            Ok(serde_json::to_value(&board)?)
        }
        .await;

        logged(self, start, result)
    }
}
