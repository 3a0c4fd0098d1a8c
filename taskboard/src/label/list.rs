//! ListLabels command

use super::labels_of;
use crate::context::{BoardContext, LatencyKind};
use crate::error::{BoardError, Result};
use crate::processor::unlogged;
use crate::types::BoardId;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use taskboard_operations::{async_trait, operation, Execute, ExecutionResult};

/// List the labels available on a board
#[operation(verb = "list", noun = "labels", description = "List the labels of a board")]
#[derive(Debug, Deserialize, Serialize)]
pub struct ListLabels {
    /// The board ID
    pub board_id: BoardId,
}

impl ListLabels {
    pub fn new(board_id: impl Into<BoardId>) -> Self {
        Self {
            board_id: board_id.into(),
        }
    }
}

#[async_trait]
impl Execute<BoardContext, BoardError> for ListLabels {
    async fn execute(&self, ctx: &BoardContext) -> ExecutionResult<Value, BoardError> {
        let result: Result<Value> = async {
            ctx.simulate_latency(LatencyKind::Default).await;
            let store = ctx.read().await;
            Ok(serde_json::to_value(labels_of(&store, self.board_id))?)
        }
        .await;

        unlogged(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::Latency;

    #[tokio::test]
    async fn test_board_without_labels_lists_defaults() {
        let ctx = BoardContext::seeded(Latency::none());
        let value = ListLabels::new(1u64).execute(&ctx).await.into_result().unwrap();
        let labels = value.as_array().unwrap();
        assert_eq!(labels.len(), 6);
        assert_eq!(labels[0]["id"], "#61BD4F");
        assert_eq!(labels[0]["color"], "#61BD4F");
    }
}
