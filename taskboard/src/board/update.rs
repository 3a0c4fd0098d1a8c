//! UpdateBoard command

use crate::context::{BoardContext, LatencyKind};
use crate::error::{BoardError, Result};
use crate::processor::logged;
use crate::types::BoardId;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Instant;
use taskboard_operations::{async_trait, operation, Execute, ExecutionResult};

/// Update board metadata
#[operation(
    verb = "update",
    noun = "board",
    description = "Update board title, description or background"
)]
#[derive(Debug, Deserialize, Serialize)]
pub struct UpdateBoard {
    /// The board ID
    pub id: BoardId,
    /// New title
    pub title: Option<String>,
    /// New description
    pub description: Option<String>,
    /// New background color
    pub background_color: Option<String>,
}

impl UpdateBoard {
    pub fn new(id: impl Into<BoardId>) -> Self {
        Self {
            id: id.into(),
            title: None,
            description: None,
            background_color: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
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
impl Execute<BoardContext, BoardError> for UpdateBoard {
    async fn execute(&self, ctx: &BoardContext) -> ExecutionResult<Value, BoardError> {
        let start = Instant::now();

        let result: Result<Value> = async {
            ctx.simulate_latency(LatencyKind::Default).await;

            let now = ctx.timestamp();
            let mut store = ctx.write().await;
            let board = store.require_board_mut(self.id)?;

            if let Some(title) = &self.title {
                board.title = title.clone();
            }
            if let Some(description) = &self.description {
                board.description = description.clone();
            }
            if let Some(color) = &self.background_color {
                board.background_color = color.clone();
            }
            board.last_activity = now;

            Ok(serde_json::to_value(&*board)?)
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
    async fn test_update_board_title() {
        let ctx = BoardContext::seeded(Latency::none());
        let value = UpdateBoard::new(2u64)
            .with_title("Marketing Q2")
            .execute(&ctx)
            .await
            .into_result()
            .unwrap();

        assert_eq!(value["title"], "Marketing Q2");
        assert_eq!(value["description"], "Campañas de marketing para el primer trimestre");
        assert_ne!(value["lastActivity"], "2024-03-09");
    }

    #[tokio::test]
    async fn test_update_missing_board() {
        let ctx = BoardContext::seeded(Latency::none());
        let result = UpdateBoard::new(5u64).with_title("x").execute(&ctx).await;
        assert!(result.should_log());
        assert!(matches!(
            result.into_result(),
            Err(BoardError::BoardNotFound { .. })
        ));
    }
}
