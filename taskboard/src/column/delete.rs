//! DeleteColumn command

use crate::context::{BoardContext, LatencyKind};
use crate::error::{BoardError, Result};
use crate::processor::logged;
use crate::types::{BoardId, ColumnId};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::time::Instant;
use taskboard_operations::{async_trait, operation, Execute, ExecutionResult};

/// Remove a column from a board. Missing boards or columns are not an error.
#[operation(verb = "delete", noun = "column", description = "Delete a column from a board")]
#[derive(Debug, Deserialize, Serialize)]
pub struct DeleteColumn {
    /// The board ID
    pub board_id: BoardId,
    /// The column ID
    pub column_id: ColumnId,
}

impl DeleteColumn {
    pub fn new(board_id: impl Into<BoardId>, column_id: impl Into<ColumnId>) -> Self {
        Self {
            board_id: board_id.into(),
            column_id: column_id.into(),
        }
    }
}

#[async_trait]
impl Execute<BoardContext, BoardError> for DeleteColumn {
    async fn execute(&self, ctx: &BoardContext) -> ExecutionResult<Value, BoardError> {
        let start = Instant::now();

        let result: Result<Value> = async {
            ctx.simulate_latency(LatencyKind::Default).await;

            let mut store = ctx.write().await;
            let deleted = match store.columns.get_mut(&self.board_id) {
                Some(columns) => {
                    let before = columns.len();
                    columns.retain(|c| c.id != self.column_id);
                    columns.len() < before
                }
                None => false,
            };

            Ok(json!({ "deleted": deleted, "id": self.column_id }))
        }
        .await;

        logged(self, start, result)
    }
}
