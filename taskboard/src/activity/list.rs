//! ListActivity command

use crate::context::{BoardContext, LatencyKind};
use crate::error::{BoardError, Result};
use crate::processor::unlogged;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use taskboard_operations::{async_trait, operation, Execute, ExecutionResult};

/// List recorded operations, most recent first
#[operation(verb = "list", noun = "activity", description = "List recent activity, newest first")]
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ListActivity {
    /// Maximum number of entries to return
    pub limit: Option<usize>,
}

impl ListActivity {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limit(limit: usize) -> Self {
        Self { limit: Some(limit) }
    }
}

#[async_trait]
impl Execute<BoardContext, BoardError> for ListActivity {
    async fn execute(&self, ctx: &BoardContext) -> ExecutionResult<Value, BoardError> {
        let result: Result<Value> = async {
            ctx.simulate_latency(LatencyKind::Default).await;
            let entries = ctx.read_activity(self.limit).await;
            Ok(serde_json::to_value(entries)?)
        }
        .await;

        unlogged(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::Latency;
    use crate::processor::BoardOperationProcessor;
    use crate::task::{AddTask, UpdateTask};
    use taskboard_operations::OperationProcessor;

    #[tokio::test]
    async fn test_list_activity_after_mutations() {
        let ctx = BoardContext::seeded(Latency::none());
        let processor = BoardOperationProcessor::with_actor("user-1");

        processor
            .process(&AddTask::new(1u64, 1u64, "Primera"), &ctx)
            .await
            .unwrap();
        processor
            .process(&UpdateTask::new(1u64, "task-1").with_title("Renombrada"), &ctx)
            .await
            .unwrap();
        // reads are not recorded
        processor.process(&ListActivity::new(), &ctx).await.unwrap();

        let value = ListActivity::new().execute(&ctx).await.into_result().unwrap();
        let entries = value.as_array().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0]["op"], "update task");
        assert_eq!(entries[1]["op"], "add task");
        assert_eq!(entries[1]["actor"], "user-1");

        let value = ListActivity::with_limit(1)
            .execute(&ctx)
            .await
            .into_result()
            .unwrap();
        assert_eq!(value.as_array().unwrap().len(), 1);
    }
}
