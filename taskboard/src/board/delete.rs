//! DeleteBoard command

use crate::context::{BoardContext, LatencyKind};
use crate::error::{BoardError, Result};
use crate::processor::logged;
use crate::types::BoardId;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::time::Instant;
use taskboard_operations::{async_trait, operation, Execute, ExecutionResult};
use tracing::info;

/// Delete a board and its column layout. Task data is left in place.
#[operation(verb = "delete", noun = "board", description = "Delete a board and its columns")]
#[derive(Debug, Deserialize, Serialize)]
pub struct DeleteBoard {
    /// The board ID
    pub id: BoardId,
}

impl DeleteBoard {
    pub fn new(id: impl Into<BoardId>) -> Self {
        Self { id: id.into() }
    }
}

#[async_trait]
impl Execute<BoardContext, BoardError> for DeleteBoard {
    async fn execute(&self, ctx: &BoardContext) -> ExecutionResult<Value, BoardError> {
        let start = Instant::now();

        let result: Result<Value> = async {
            ctx.simulate_latency(LatencyKind::Default).await;

            let mut store = ctx.write().await;
            let index = store
                .boards
                .iter()
                .position(|b| b.id == self.id)
                .ok_or_else(|| BoardError::board_not_found(self.id))?;

            store.boards.remove(index);
            store.columns.remove(&self.id);

            info!(board_id = %self.id, "deleted board");
            Ok(json!({ "deleted": true, "id": self.id }))
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
    async fn test_delete_board() {
        let ctx = BoardContext::seeded(Latency::none());
        let value = DeleteBoard::new(1u64)
            .execute(&ctx)
            .await
            .into_result()
            .unwrap();
        assert_eq!(value["deleted"], true);

        let store = ctx.read().await;
        assert!(store.board(BoardId::new(1)).is_none());
        assert!(!store.columns.contains_key(&BoardId::new(1)));
        assert_eq!(store.boards.len(), 1);
    }

    #[tokio::test]
    async fn test_delete_missing_board() {
        let ctx = BoardContext::new(Latency::none());
        let result = DeleteBoard::new(1u64).execute(&ctx).await.into_result();
        assert!(matches!(result, Err(BoardError::BoardNotFound { .. })));
    }
}
