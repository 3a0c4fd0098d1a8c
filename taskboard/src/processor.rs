//! Operation processing and activity logging

use crate::context::BoardContext;
use crate::error::{BoardError, Result};
use serde::Serialize;
use serde_json::{json, Value};
use std::time::Instant;
use taskboard_operations::{async_trait, ExecutionResult, LogEntry, Operation, OperationProcessor};
use tracing::debug;

/// Processor that appends logged operations to the context's activity log
#[derive(Debug, Clone, Default)]
pub struct BoardOperationProcessor {
    actor: Option<String>,
}

impl BoardOperationProcessor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attribute every recorded entry to `actor`
    pub fn with_actor(actor: impl Into<String>) -> Self {
        Self {
            actor: Some(actor.into()),
        }
    }
}

#[async_trait]
impl OperationProcessor<BoardContext, BoardError> for BoardOperationProcessor {
    fn actor(&self) -> Option<&str> {
        self.actor.as_deref()
    }

    async fn record(&self, ctx: &BoardContext, entry: LogEntry) {
        debug!(op = %entry.op, duration_ms = entry.duration_ms, "recording activity");
        ctx.append_activity(entry).await;
    }
}

/// Wrap the outcome of a mutating command. Failures keep their log entry
/// with the error message as output.
pub(crate) fn logged<O>(op: &O, start: Instant, result: Result<Value>) -> ExecutionResult<Value, BoardError>
where
    O: Operation + Serialize,
{
    let input = serde_json::to_value(op).unwrap_or_default();
    let duration_ms = start.elapsed().as_millis() as u64;

    match result {
        Ok(value) => ExecutionResult::Logged {
            value: value.clone(),
            log_entry: LogEntry::new(op.op_string(), input, value, None, duration_ms),
        },
        Err(error) => {
            let error_msg = error.to_string();
            ExecutionResult::Failed {
                error,
                log_entry: Some(LogEntry::new(
                    op.op_string(),
                    input,
                    json!({ "error": error_msg }),
                    None,
                    duration_ms,
                )),
            }
        }
    }
}

/// Wrap the outcome of a read-only command
pub(crate) fn unlogged(result: Result<Value>) -> ExecutionResult<Value, BoardError> {
    match result {
        Ok(value) => ExecutionResult::Unlogged { value },
        Err(error) => ExecutionResult::Failed {
            error,
            log_entry: None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::Latency;
    use serde::Deserialize;
    use taskboard_operations::{operation, Execute};

    #[operation(verb = "touch", noun = "board", description = "Test mutation")]
    #[derive(Debug, Deserialize, Serialize)]
    struct TouchBoard {
        fail: bool,
    }

    #[async_trait]
    impl Execute<BoardContext, BoardError> for TouchBoard {
        async fn execute(&self, _ctx: &BoardContext) -> ExecutionResult<Value, BoardError> {
            let start = Instant::now();
            let result = if self.fail {
                Err(BoardError::board_not_found(7))
            } else {
                Ok(json!({ "touched": true }))
            };
            logged(self, start, result)
        }
    }

    #[tokio::test]
    async fn test_processor_records_with_actor() {
        let ctx = BoardContext::new(Latency::none());
        let processor = BoardOperationProcessor::with_actor("user-1");

        let value = processor
            .process(&TouchBoard { fail: false }, &ctx)
            .await
            .unwrap();
        assert_eq!(value["touched"], true);

        let activity = ctx.read_activity(None).await;
        assert_eq!(activity.len(), 1);
        assert_eq!(activity[0].op, "touch board");
        assert_eq!(activity[0].actor.as_deref(), Some("user-1"));
        assert_eq!(activity[0].input["fail"], false);
    }

    #[tokio::test]
    async fn test_failed_mutation_is_recorded() {
        let ctx = BoardContext::new(Latency::none());
        let processor = BoardOperationProcessor::new();

        let result = processor.process(&TouchBoard { fail: true }, &ctx).await;
        assert!(matches!(result, Err(BoardError::BoardNotFound { .. })));

        let activity = ctx.read_activity(None).await;
        assert_eq!(activity[0].output["error"], "board not found: 7");
        assert!(activity[0].actor.is_none());
    }

    #[test]
    fn test_unlogged_failure_has_no_entry() {
        let result = unlogged(Err(BoardError::InvalidCredentials));
        assert!(!result.should_log());
    }
}
