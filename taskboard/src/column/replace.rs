//! ReplaceColumns command

use crate::context::{BoardContext, LatencyKind};
use crate::error::{BoardError, Result};
use crate::processor::logged;
use crate::types::{BoardId, Column};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Instant;
use taskboard_operations::{async_trait, operation, Execute, ExecutionResult};
use tracing::debug;

/// Overwrite a board's column layout, e.g. after a drag and drop
#[operation(
    verb = "replace",
    noun = "columns",
    description = "Replace the column layout of a board"
)]
#[derive(Debug, Deserialize, Serialize)]
pub struct ReplaceColumns {
    /// The board ID
    pub board_id: BoardId,
    /// The new columns, in order
    pub columns: Vec<Column>,
}

impl ReplaceColumns {
    pub fn new(board_id: impl Into<BoardId>, columns: Vec<Column>) -> Self {
        Self {
            board_id: board_id.into(),
            columns,
        }
    }
}

#[async_trait]
impl Execute<BoardContext, BoardError> for ReplaceColumns {
    async fn execute(&self, ctx: &BoardContext) -> ExecutionResult<Value, BoardError> {
        let start = Instant::now();

        let result: Result<Value> = async {
            ctx.simulate_latency(LatencyKind::Default).await;

            let mut store = ctx.write().await;
            store.columns.insert(self.board_id, self.columns.clone());

            debug!(board_id = %self.board_id, columns = self.columns.len(), "replaced columns");
            Ok(serde_json::to_value(&self.columns)?)
        }
        .await;

        logged(self, start, result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::Latency;

    #[tokio::test]
    async fn test_replace_columns_moves_task() {
        let ctx = BoardContext::seeded(Latency::none());
        let mut columns = ctx.read_columns(BoardId::new(1)).await;
        let task = columns[0].task_ids.remove(0);
        columns[1].task_ids.push(task);

        ReplaceColumns::new(1u64, columns)
            .execute(&ctx)
            .await
            .into_result()
            .unwrap();

        let stored = ctx.read_columns(BoardId::new(1)).await;
        assert_eq!(stored[0].task_ids.len(), 1);
        assert_eq!(stored[1].task_ids.len(), 2);
        assert!(stored[1].contains(&"task-1".into()));
    }
}
