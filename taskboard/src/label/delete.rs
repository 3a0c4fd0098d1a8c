//! DeleteLabel command

use super::labels_mut;
use crate::context::{BoardContext, LatencyKind};
use crate::error::{BoardError, Result};
use crate::processor::logged;
use crate::types::{BoardId, LabelId};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::time::Instant;
use taskboard_operations::{async_trait, operation, Execute, ExecutionResult};

/// Remove a label from a board. Tasks keep the color code they carry.
#[operation(verb = "delete", noun = "label", description = "Delete a label from a board")]
#[derive(Debug, Deserialize, Serialize)]
pub struct DeleteLabel {
    /// The board ID
    pub board_id: BoardId,
    /// The label ID
    pub id: LabelId,
}

impl DeleteLabel {
    pub fn new(board_id: impl Into<BoardId>, id: impl Into<LabelId>) -> Self {
        Self {
            board_id: board_id.into(),
            id: id.into(),
        }
    }
}

#[async_trait]
impl Execute<BoardContext, BoardError> for DeleteLabel {
    async fn execute(&self, ctx: &BoardContext) -> ExecutionResult<Value, BoardError> {
        let start = Instant::now();

        let result: Result<Value> = async {
            ctx.simulate_latency(LatencyKind::Default).await;

            let mut store = ctx.write().await;
            let labels = labels_mut(&mut store, self.board_id);
            let before = labels.len();
            labels.retain(|l| l.id != self.id);
            let deleted = labels.len() < before;

            Ok(json!({ "deleted": deleted, "id": self.id }))
        }
        .await;

        logged(self, start, result)
    }
}
