//! Operation processor: executes a command and records its log entry

use crate::{Execute, LogEntry};
use async_trait::async_trait;
use serde_json::Value;

/// Runs operations and hands logged results to `record`
#[async_trait]
pub trait OperationProcessor<C, E>: Send + Sync
where
    C: Send + Sync,
    E: Send,
{
    /// Actor attributed to every entry this processor records
    fn actor(&self) -> Option<&str>;

    /// Persist one entry for the given context
    async fn record(&self, ctx: &C, entry: LogEntry);

    /// Execute `operation`, record its entry when it has one, return the outcome
    async fn process<O>(&self, operation: &O, ctx: &C) -> Result<Value, E>
    where
        O: Execute<C, E>,
    {
        let (outcome, entry) = operation.execute(ctx).await.split();

        if let Some(entry) = entry {
            let entry = match self.actor() {
                Some(actor) => entry.with_actor(actor),
                None => entry,
            };
            self.record(ctx, entry).await;
        }

        outcome
    }
}
