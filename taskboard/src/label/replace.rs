//! ReplaceLabels command

use crate::context::{BoardContext, LatencyKind};
use crate::error::{BoardError, Result};
use crate::processor::logged;
use crate::types::{BoardId, Label};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Instant;
use taskboard_operations::{async_trait, operation, Execute, ExecutionResult};

/// Overwrite the label list of a board
#[operation(verb = "replace", noun = "labels", description = "Replace the labels of a board")]
#[derive(Debug, Deserialize, Serialize)]
pub struct ReplaceLabels {
    /// The board ID
    pub board_id: BoardId,
    /// The new label list
    pub labels: Vec<Label>,
}

impl ReplaceLabels {
    pub fn new(board_id: impl Into<BoardId>, labels: Vec<Label>) -> Self {
        Self {
            board_id: board_id.into(),
            labels,
        }
    }
}

#[async_trait]
impl Execute<BoardContext, BoardError> for ReplaceLabels {
    async fn execute(&self, ctx: &BoardContext) -> ExecutionResult<Value, BoardError> {
        let start = Instant::now();

        let result: Result<Value> = async {
            ctx.simulate_latency(LatencyKind::Default).await;
            let mut store = ctx.write().await;
            store.labels.insert(self.board_id, self.labels.clone());
            Ok(serde_json::to_value(&self.labels)?)
        }
        .await;

        logged(self, start, result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::Latency;
    use crate::label::ListLabels;

    #[tokio::test]
    async fn test_replace_then_list() {
        let ctx = BoardContext::seeded(Latency::none());
        ReplaceLabels::new(1u64, vec![Label::new("label-bug", "Bug", "#EB5A46")])
            .execute(&ctx)
            .await
            .into_result()
            .unwrap();

        let value = ListLabels::new(1u64).execute(&ctx).await.into_result().unwrap();
        assert_eq!(value.as_array().unwrap().len(), 1);
        assert_eq!(value[0]["name"], "Bug");

        // other boards keep the defaults
        let value = ListLabels::new(2u64).execute(&ctx).await.into_result().unwrap();
        assert_eq!(value.as_array().unwrap().len(), 6);
    }

    #[tokio::test]
    async fn test_replace_with_empty_list() {
        let ctx = BoardContext::seeded(Latency::none());
        ReplaceLabels::new(1u64, Vec::new())
            .execute(&ctx)
            .await
            .into_result()
            .unwrap();
        let value = ListLabels::new(1u64).execute(&ctx).await.into_result().unwrap();
        assert_eq!(value, serde_json::json!([]));
    }
}
