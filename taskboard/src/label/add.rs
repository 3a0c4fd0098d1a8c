//! AddLabel command

use super::labels_mut;
use crate::context::{BoardContext, LatencyKind};
use crate::error::{BoardError, Result};
use crate::processor::logged;
use crate::types::{BoardId, Label, LabelId};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Instant;
use taskboard_operations::{async_trait, operation, Execute, ExecutionResult};

/// Define a new label on a board
#[operation(verb = "add", noun = "label", description = "Add a label to a board")]
#[derive(Debug, Deserialize, Serialize)]
pub struct AddLabel {
    /// The board ID
    pub board_id: BoardId,
    /// Display name
    pub name: String,
    /// Color code, e.g. "#61BD4F"
    pub color: String,
}

impl AddLabel {
    pub fn new(
        board_id: impl Into<BoardId>,
        name: impl Into<String>,
        color: impl Into<String>,
    ) -> Self {
        Self {
            board_id: board_id.into(),
            name: name.into(),
            color: color.into(),
        }
    }
}

#[async_trait]
impl Execute<BoardContext, BoardError> for AddLabel {
    async fn execute(&self, ctx: &BoardContext) -> ExecutionResult<Value, BoardError> {
        let start = Instant::now();

        let result: Result<Value> = async {
            ctx.simulate_latency(LatencyKind::Default).await;

            let label = Label::new(LabelId::new(), self.name.clone(), self.color.clone());
            let value = serde_json::to_value(&label)?;
            let mut store = ctx.write().await;
            labels_mut(&mut store, self.board_id).push(label);

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
    async fn test_add_label_extends_defaults() {
        let ctx = BoardContext::seeded(Latency::none());
        let value = AddLabel::new(1u64, "Spike", "#344563")
            .execute(&ctx)
            .await
            .into_result()
            .unwrap();
        assert!(value["id"].as_str().unwrap().starts_with("label-"));

        let labels = ctx.read().await.labels[&BoardId::new(1)].clone();
        assert_eq!(labels.len(), 7);
        assert_eq!(labels[6].name, "Spike");
    }
}
