//! GetBoardTimeline command

use crate::context::{BoardContext, BoardSnapshot, LatencyKind};
use crate::error::{BoardError, Result};
use crate::processor::unlogged;
use crate::types::{BoardId, TaskId, Timestamp, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use taskboard_operations::{async_trait, operation, Execute, ExecutionResult};
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Creation,
    Comment,
    Update,
}

/// One dated thing that happened to a task
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineEvent {
    pub date: DateTime<Utc>,
    #[serde(rename = "type")]
    pub kind: EventKind,
    pub task_id: TaskId,
    pub task_title: String,
    /// Comment author, only on comment events
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<UserId>,
}

/// Events of every task, newest first. Events sharing a date keep the order
/// they were generated in: per task, creation then comments then update.
pub fn build_timeline(snapshot: &BoardSnapshot) -> Vec<TimelineEvent> {
    let mut events = Vec::new();

    for task in snapshot.tasks.values() {
        let mut push = |at: &Timestamp, kind: EventKind, user_id: Option<UserId>| {
            match at.parse() {
                Some(date) => events.push(TimelineEvent {
                    date,
                    kind,
                    task_id: task.id.clone(),
                    task_title: task.title.clone(),
                    user_id,
                }),
                None => warn!(task = %task.id, ?kind, at = %at, "skipping unparseable timestamp"),
            }
        };

        push(&task.created_at, EventKind::Creation, None);
        for comment in &task.comments {
            push(&comment.created_at, EventKind::Comment, Some(comment.author.clone()));
        }
        // textual comparison: a stamp rewritten to the same string is no update
        if task.updated_at != task.created_at {
            push(&task.updated_at, EventKind::Update, None);
        }
    }

    // sort_by is stable
    events.sort_by(|a, b| b.date.cmp(&a.date));
    events
}

/// List task activity on a board, newest first
#[operation(
    verb = "get",
    noun = "timeline",
    description = "List task events on a board, newest first"
)]
#[derive(Debug, Deserialize, Serialize)]
pub struct GetBoardTimeline {
    /// The board to list events for
    pub board_id: BoardId,
}

impl GetBoardTimeline {
    pub fn new(board_id: impl Into<BoardId>) -> Self {
        Self {
            board_id: board_id.into(),
        }
    }

    pub async fn build(&self, ctx: &BoardContext) -> Vec<TimelineEvent> {
        ctx.simulate_latency(LatencyKind::Default).await;

        let snapshot = ctx.snapshot(self.board_id).await;
        let events = build_timeline(&snapshot);

        debug!(board_id = %self.board_id, events = events.len(), "built timeline");
        events
    }
}

#[async_trait]
impl Execute<BoardContext, BoardError> for GetBoardTimeline {
    async fn execute(&self, ctx: &BoardContext) -> ExecutionResult<Value, BoardError> {
        let result: Result<Value> = async {
            let events = self.build(ctx).await;
            Ok(serde_json::to_value(events)?)
        }
        .await;

        unlogged(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::fixtures::{at, snapshot, task};
    use crate::context::Latency;
    use crate::types::Comment;

    fn kinds(events: &[TimelineEvent]) -> Vec<(&str, EventKind)> {
        events
            .iter()
            .map(|e| (e.task_id.as_str(), e.kind))
            .collect()
    }

    #[test]
    fn test_creation_events_sorted_descending() {
        // inserted T1, T2, T3 with T3 > T1 > T2
        let snap = snapshot(
            vec![
                task("t1", "2025-03-02T00:00:00Z"),
                task("t2", "2025-03-01T00:00:00Z"),
                task("t3", "2025-03-03T00:00:00Z"),
            ],
            vec![],
        );

        let events = build_timeline(&snap);
        assert_eq!(
            kinds(&events),
            [
                ("t3", EventKind::Creation),
                ("t1", EventKind::Creation),
                ("t2", EventKind::Creation),
            ]
        );
        assert_eq!(events[0].date, at("2025-03-03T00:00:00Z"));
    }

    #[test]
    fn test_comment_and_update_events() {
        let mut commented = task("t1", "2025-03-01T00:00:00Z")
            .updated(Timestamp::from("2025-03-05T00:00:00Z"));
        commented.comments.push(Comment::new(
            "looks good",
            "user-3",
            Timestamp::from("2025-03-04T00:00:00Z"),
        ));

        let events = build_timeline(&snapshot(vec![commented], vec![]));
        assert_eq!(
            kinds(&events),
            [
                ("t1", EventKind::Update),
                ("t1", EventKind::Comment),
                ("t1", EventKind::Creation),
            ]
        );
        assert_eq!(events[1].user_id, Some(UserId::from("user-3")));
        assert!(events[0].user_id.is_none());
    }

    #[test]
    fn test_update_uses_string_inequality() {
        // same instant, different spelling
        let respelled = task("t1", "2025-03-01T00:00:00Z")
            .updated(Timestamp::from("2025-03-01T00:00:00.000Z"));
        let untouched = task("t2", "2025-03-01T00:00:00Z");

        let events = build_timeline(&snapshot(vec![respelled, untouched], vec![]));
        assert_eq!(
            kinds(&events),
            [
                ("t1", EventKind::Creation),
                ("t1", EventKind::Update),
                ("t2", EventKind::Creation),
            ]
        );
    }

    #[test]
    fn test_ties_keep_generation_order() {
        let mut t1 = task("t1", "2025-03-01T00:00:00Z");
        t1.comments.push(Comment::new(
            "first",
            "user-1",
            Timestamp::from("2025-03-01T00:00:00Z"),
        ));
        let t2 = task("t2", "2025-03-01T00:00:00Z");

        let events = build_timeline(&snapshot(vec![t1, t2], vec![]));
        assert_eq!(
            kinds(&events),
            [
                ("t1", EventKind::Creation),
                ("t1", EventKind::Comment),
                ("t2", EventKind::Creation),
            ]
        );
    }

    #[test]
    fn test_event_json_shape() {
        let events = build_timeline(&snapshot(vec![task("t1", "2025-03-01T00:00:00Z")], vec![]));
        let value = serde_json::to_value(&events).unwrap();
        assert_eq!(value[0]["type"], "creation");
        assert_eq!(value[0]["taskId"], "t1");
        assert!(value[0].get("userId").is_none());
    }

    #[tokio::test]
    async fn test_timeline_is_idempotent() {
        let ctx = BoardContext::seeded(Latency::none());
        let first = GetBoardTimeline::new(1u64).build(&ctx).await;
        let second = GetBoardTimeline::new(1u64).build(&ctx).await;

        assert!(!first.is_empty());
        assert_eq!(first, second);
        assert!(first.windows(2).all(|w| w[0].date >= w[1].date));
    }

    #[tokio::test]
    async fn test_unknown_board_is_empty() {
        let ctx = BoardContext::seeded(Latency::none());
        let value = GetBoardTimeline::new(2u64)
            .execute(&ctx)
            .await
            .into_result()
            .unwrap();
        assert_eq!(value, serde_json::json!([]));
    }
}
