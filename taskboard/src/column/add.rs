//! AddColumn command

use crate::context::{BoardContext, LatencyKind};
use crate::error::{BoardError, Result};
use crate::processor::logged;
use crate::types::{BoardId, Column, ColumnId};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Instant;
use taskboard_operations::{async_trait, operation, Execute, ExecutionResult};

/// Append an empty column to a board
#[operation(verb = "add", noun = "column", description = "Add a new column to a board")]
#[derive(Debug, Deserialize, Serialize)]
pub struct AddColumn {
    /// The board ID
    pub board_id: BoardId,
    /// The column title
    pub title: String,
}

impl AddColumn {
    pub fn new(board_id: impl Into<BoardId>, title: impl Into<String>) -> Self {
        Self {
            board_id: board_id.into(),
            title: title.into(),
        }
    }
}

#[async_trait]
impl Execute<BoardContext, BoardError> for AddColumn {
    async fn execute(&self, ctx: &BoardContext) -> ExecutionResult<Value, BoardError> {
        let start = Instant::now();

        let result: Result<Value> = async {
            ctx.simulate_latency(LatencyKind::Default).await;

            let mut store = ctx.write().await;
            let columns = store.columns.entry(self.board_id).or_default();

            let id = columns.iter().map(|c| c.id.get()).max().unwrap_or(0) + 1;
            let column = Column::new(ColumnId::new(id), self.title.clone());
            columns.push(column.clone());

            let mut value = serde_json::to_value(&column)?;
            value["tasks"] = serde_json::json!([]);
            Ok(value)
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
    async fn test_add_column_takes_next_id() {
        let ctx = BoardContext::seeded(Latency::none());
        let value = AddColumn::new(1u64, "Completed")
            .execute(&ctx)
            .await
            .into_result()
            .unwrap();

        assert_eq!(value["id"], 7);
        assert_eq!(value["title"], "Completed");
        assert_eq!(value["tasks"], serde_json::json!([]));
    }

    #[tokio::test]
    async fn test_add_first_column() {
        let ctx = BoardContext::seeded(Latency::none());
        let value = AddColumn::new(2u64, "Ideas")
            .execute(&ctx)
            .await
            .into_result()
            .unwrap();

        assert_eq!(value["id"], 1);
        assert_eq!(ctx.read_columns(BoardId::new(2)).await.len(), 1);
    }
}
