//! GetBoardActivity command

use crate::context::{BoardContext, LatencyKind};
use crate::error::{BoardError, Result};
use crate::processor::unlogged;
use crate::types::{BoardId, Timestamp, User};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use taskboard_operations::{async_trait, operation, Execute, ExecutionResult};

/// Summary of when a board was touched and who owns it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardActivity {
    pub created_at: Option<Timestamp>,
    pub last_activity: Timestamp,
    pub total_members: usize,
    pub owner: User,
}

#[operation(
    verb = "get",
    noun = "activity",
    description = "Summarize board activity and ownership"
)]
#[derive(Debug, Deserialize, Serialize)]
pub struct GetBoardActivity {
    /// The board ID
    pub board_id: BoardId,
}

impl GetBoardActivity {
    pub fn new(board_id: impl Into<BoardId>) -> Self {
        Self {
            board_id: board_id.into(),
        }
    }
}

#[async_trait]
impl Execute<BoardContext, BoardError> for GetBoardActivity {
    async fn execute(&self, ctx: &BoardContext) -> ExecutionResult<Value, BoardError> {
        let result: Result<Value> = async {
            ctx.simulate_latency(LatencyKind::Default).await;

            let store = ctx.read().await;
            let board = store.require_board(self.board_id)?;
            let owner = store
                .user(&board.owner)
                .ok_or_else(|| BoardError::user_not_found(&board.owner))?;

            let activity = BoardActivity {
                created_at: board.created_at.clone(),
                last_activity: board.last_activity.clone(),
                total_members: board.members.len(),
                owner: owner.clone(),
            };
            Ok(serde_json::to_value(activity)?)
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
    async fn test_board_activity() {
        let ctx = BoardContext::seeded(Latency::none());
        let value = GetBoardActivity::new(1u64)
            .execute(&ctx)
            .await
            .into_result()
            .unwrap();

        assert_eq!(value["lastActivity"], "2024-03-10");
        assert_eq!(value["totalMembers"], 5);
        assert_eq!(value["owner"]["name"], "Ana García");
        assert!(value["createdAt"].is_null());
    }
}
