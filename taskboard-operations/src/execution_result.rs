//! Execution result types for operations

use crate::LogEntry;

/// Result of executing an operation
///
/// - `Logged`: the operation changed board state and belongs in the activity log
/// - `Unlogged`: read-only, nothing to record
/// - `Failed`: the operation returned an error (optionally with a log entry)
#[derive(Debug)]
pub enum ExecutionResult<T, E> {
    Logged { value: T, log_entry: LogEntry },
    Unlogged { value: T },
    Failed {
        error: E,
        log_entry: Option<LogEntry>,
    },
}

impl<T, E> ExecutionResult<T, E> {
    /// Collapse into a plain `Result`, dropping any log entry
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Self::Logged { value, .. } | Self::Unlogged { value } => Ok(value),
            Self::Failed { error, .. } => Err(error),
        }
    }

    /// Split into the outcome and the entry to record, if any
    pub fn split(self) -> (Result<T, E>, Option<LogEntry>) {
        match self {
            Self::Logged { value, log_entry } => (Ok(value), Some(log_entry)),
            Self::Unlogged { value } => (Ok(value), None),
            Self::Failed { error, log_entry } => (Err(error), log_entry),
        }
    }

    /// Whether a processor should record this result
    pub fn should_log(&self) -> bool {
        matches!(
            self,
            Self::Logged { .. }
                | Self::Failed {
                    log_entry: Some(_),
                    ..
                }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unlogged_is_not_recorded() {
        let result: ExecutionResult<i32, String> = ExecutionResult::Unlogged { value: 7 };
        assert!(!result.should_log());
        assert_eq!(result.into_result(), Ok(7));
    }

    #[test]
    fn test_logged_split_returns_entry() {
        let entry = LogEntry::new("add task", json!({}), json!({"id": "task-1"}), None, 0);
        let result: ExecutionResult<i32, String> = ExecutionResult::Logged {
            value: 1,
            log_entry: entry,
        };
        assert!(result.should_log());
        let (value, entry) = result.split();
        assert_eq!(value, Ok(1));
        assert_eq!(entry.unwrap().op, "add task");
    }

    #[test]
    fn test_failed_without_entry() {
        let result: ExecutionResult<i32, String> = ExecutionResult::Failed {
            error: "boom".into(),
            log_entry: None,
        };
        assert!(!result.should_log());
        assert_eq!(result.into_result(), Err("boom".to_string()));
    }
}
