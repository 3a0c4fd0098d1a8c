//! ComputeBoardStats command

use crate::context::{BoardContext, BoardSnapshot, LatencyKind};
use crate::error::{BoardError, Result};
use crate::processor::unlogged;
use crate::types::{BoardId, Column, ColumnId, Priority, Task, UserId};
use chrono::{DateTime, Duration, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use taskboard_operations::{async_trait, operation, Execute, ExecutionResult};
use tracing::debug;

/// Length of the trailing activity window
const RECENT_WINDOW_DAYS: i64 = 7;

const MILLIS_PER_HOUR: f64 = 3_600_000.0;

/// Task counts per recognized priority
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriorityCounts {
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

impl PriorityCounts {
    fn from_tasks<'a>(tasks: impl IntoIterator<Item = &'a Task>) -> Self {
        let mut counts = Self::default();
        for task in tasks {
            match task.priority {
                Some(Priority::High) => counts.high += 1,
                Some(Priority::Medium) => counts.medium += 1,
                Some(Priority::Low) => counts.low += 1,
                Some(Priority::Unrecognized) | None => {}
            }
        }
        counts
    }

    pub fn total(&self) -> usize {
        self.high + self.medium + self.low
    }
}

/// Board-wide breakdown for one assigned member.
///
/// Each task lands in at most one of `completed`, `blocked`, `in_progress`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberStats {
    pub total: usize,
    pub completed: usize,
    pub in_progress: usize,
    pub blocked: usize,
}

/// Per-column breakdown for one member; counters are independent
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnMemberStats {
    pub count: usize,
    pub completed: usize,
    pub blocked: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnStatsDetail {
    pub total_tasks: usize,
    pub completed_tasks: usize,
    pub blocked_tasks: usize,
    pub tasks_by_priority: PriorityCounts,
    pub member_stats: IndexMap<UserId, ColumnMemberStats>,
    pub estimated_points: f64,
    pub completed_points: f64,
    pub average_task_time: f64,
    /// Hours since last update, averaged over the column's tasks
    pub average_time_in_column: f64,
    pub oldest_task: Option<DateTime<Utc>>,
    pub newest_task: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnStats {
    pub id: ColumnId,
    pub name: String,
    pub stats: ColumnStatsDetail,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeStats {
    pub total_estimated: f64,
    pub total_completed: f64,
    /// Mean estimate of completed tasks, 0 when none are completed
    pub average_task_time: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentActivity {
    /// Tasks created in the last seven days
    pub new_tasks: usize,
    /// Tasks completed in the last seven days
    pub completed_tasks: usize,
    /// Comments on the board, all time
    pub comments: usize,
}

/// Aggregate statistics for one board
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardStats {
    pub total_tasks: usize,
    pub completed_tasks: usize,
    pub blocked_tasks: usize,
    pub in_progress_tasks: usize,
    pub tasks_by_priority: PriorityCounts,
    pub tasks_by_member: IndexMap<UserId, MemberStats>,
    /// Percentage in `[0, 100]`
    pub completion_rate: f64,
    pub column_stats: Vec<ColumnStats>,
    pub time_stats: TimeStats,
    pub recent_activity: RecentActivity,
}

impl BoardStats {
    /// Aggregate a board snapshot as seen at `now`
    pub fn from_snapshot(snapshot: &BoardSnapshot, now: DateTime<Utc>) -> Self {
        let tasks: Vec<&Task> = snapshot.tasks.values().collect();

        let total_tasks = tasks.len();
        let completed_tasks = tasks.iter().filter(|t| t.completed).count();
        let blocked_tasks = tasks.iter().filter(|t| t.is_blocked()).count();

        let progress_column = snapshot
            .columns
            .iter()
            .find(|c| c.title_contains("progress") || c.title_contains("progreso"));
        let in_progress_tasks = tasks
            .iter()
            .filter(|t| !t.completed && !t.blocked)
            .filter(|t| progress_column.is_some_and(|c| c.contains(&t.id)))
            .count();

        let total_completed: f64 = tasks.iter().map(|t| t.completed_estimate()).sum();
        let time_stats = TimeStats {
            total_estimated: tasks.iter().map(|t| t.time_estimation).sum(),
            total_completed,
            average_task_time: mean(total_completed, completed_tasks),
        };

        let completion_rate = if total_tasks == 0 {
            0.0
        } else {
            completed_tasks as f64 / total_tasks as f64 * 100.0
        };

        Self {
            total_tasks,
            completed_tasks,
            blocked_tasks,
            in_progress_tasks,
            tasks_by_priority: PriorityCounts::from_tasks(tasks.iter().copied()),
            tasks_by_member: member_breakdown(&tasks, &snapshot.columns),
            completion_rate,
            column_stats: snapshot
                .columns
                .iter()
                .map(|column| column_stats(snapshot, column, now))
                .collect(),
            time_stats,
            recent_activity: recent_activity(&tasks, now),
        }
    }
}

fn mean(sum: f64, count: usize) -> f64 {
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}

/// Members are classified against the first column whose title mentions
/// "progress", and only the `blocked` flag counts as blocked here.
fn member_breakdown(tasks: &[&Task], columns: &[Column]) -> IndexMap<UserId, MemberStats> {
    let progress_column = columns.iter().find(|c| c.title_contains("progress"));
    let mut members: IndexMap<UserId, MemberStats> = IndexMap::new();

    for task in tasks {
        for member in &task.assigned_members {
            let stats = members.entry(member.clone()).or_default();
            stats.total += 1;

            if task.completed {
                stats.completed += 1;
            } else if task.blocked {
                stats.blocked += 1;
            } else if progress_column.is_some_and(|c| c.contains(&task.id)) {
                stats.in_progress += 1;
            }
        }
    }

    members
}

fn column_stats(snapshot: &BoardSnapshot, column: &Column, now: DateTime<Utc>) -> ColumnStats {
    let tasks: Vec<&Task> = snapshot.tasks_for_column(column).collect();
    let completed: Vec<&Task> = tasks.iter().copied().filter(|t| t.completed).collect();

    let mut member_stats: IndexMap<UserId, ColumnMemberStats> = IndexMap::new();
    for task in &tasks {
        for member in &task.assigned_members {
            let stats = member_stats.entry(member.clone()).or_default();
            stats.count += 1;
            if task.completed {
                stats.completed += 1;
            }
            if task.blocked {
                stats.blocked += 1;
            }
        }
    }

    let completed_points: f64 = completed.iter().map(|t| t.time_estimation).sum();

    let idle_hours: Vec<f64> = tasks
        .iter()
        .filter_map(|t| t.updated_at.parse())
        .map(|updated| (now - updated).num_milliseconds() as f64 / MILLIS_PER_HOUR)
        .collect();

    let created: Vec<DateTime<Utc>> = tasks.iter().filter_map(|t| t.created_at.parse()).collect();

    ColumnStats {
        id: column.id,
        name: column.title.clone(),
        stats: ColumnStatsDetail {
            total_tasks: tasks.len(),
            completed_tasks: completed.len(),
            blocked_tasks: tasks.iter().filter(|t| t.is_blocked()).count(),
            tasks_by_priority: PriorityCounts::from_tasks(tasks.iter().copied()),
            member_stats,
            estimated_points: tasks.iter().map(|t| t.time_estimation).sum(),
            completed_points,
            average_task_time: mean(completed_points, completed.len()),
            average_time_in_column: mean(idle_hours.iter().sum(), idle_hours.len()),
            oldest_task: created.iter().min().copied(),
            newest_task: created.iter().max().copied(),
        },
    }
}

fn recent_activity(tasks: &[&Task], now: DateTime<Utc>) -> RecentActivity {
    let window_start = now - Duration::days(RECENT_WINDOW_DAYS);
    let in_window = |at: Option<DateTime<Utc>>| at.is_some_and(|at| at > window_start);

    RecentActivity {
        new_tasks: tasks
            .iter()
            .filter(|t| in_window(t.created_at.parse()))
            .count(),
        completed_tasks: tasks
            .iter()
            .filter(|t| in_window(t.completed_at.as_ref().and_then(|c| c.parse())))
            .count(),
        comments: tasks.iter().map(|t| t.comments.len()).sum(),
    }
}

/// Compute aggregate statistics for a board
#[operation(
    verb = "compute",
    noun = "stats",
    description = "Compute task statistics for a board"
)]
#[derive(Debug, Deserialize, Serialize)]
pub struct ComputeBoardStats {
    /// The board to analyze
    pub board_id: BoardId,
}

impl ComputeBoardStats {
    pub fn new(board_id: impl Into<BoardId>) -> Self {
        Self {
            board_id: board_id.into(),
        }
    }

    /// Statistics for the board; an unknown board yields zeroed stats
    pub async fn compute(&self, ctx: &BoardContext) -> BoardStats {
        ctx.simulate_latency(LatencyKind::Default).await;

        let snapshot = ctx.snapshot(self.board_id).await;
        let stats = BoardStats::from_snapshot(&snapshot, ctx.now());

        debug!(
            board_id = %self.board_id,
            total = stats.total_tasks,
            completed = stats.completed_tasks,
            "computed board stats"
        );
        stats
    }
}

#[async_trait]
impl Execute<BoardContext, BoardError> for ComputeBoardStats {
    async fn execute(&self, ctx: &BoardContext) -> ExecutionResult<Value, BoardError> {
        let result: Result<Value> = async {
            let stats = self.compute(ctx).await;
            Ok(serde_json::to_value(stats)?)
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
    use crate::types::{Comment, Timestamp, BLOCKING_LABEL};

    fn now() -> DateTime<Utc> {
        at("2025-03-25T12:00:00Z")
    }

    #[test]
    fn test_empty_board() {
        let stats = BoardStats::from_snapshot(&BoardSnapshot::default(), now());

        assert_eq!(stats.total_tasks, 0);
        assert_eq!(stats.completed_tasks, 0);
        assert_eq!(stats.blocked_tasks, 0);
        assert_eq!(stats.in_progress_tasks, 0);
        assert_eq!(stats.completion_rate, 0.0);
        assert_eq!(stats.tasks_by_priority.total(), 0);
        assert!(stats.tasks_by_member.is_empty());
        assert!(stats.column_stats.is_empty());
        assert_eq!(stats.time_stats, TimeStats::default());
        assert_eq!(stats.recent_activity, RecentActivity::default());
    }

    #[test]
    fn test_counts_and_in_progress() {
        let snap = snapshot(
            vec![
                task("t1", "2025-03-20T10:00:00Z"),
                task("t2", "2025-03-20T10:00:00Z").mark_blocked(),
                task("t3", "2025-03-20T10:00:00Z").with_labels([BLOCKING_LABEL]),
                task("t4", "2025-03-20T10:00:00Z")
                    .mark_completed(Timestamp::from("2025-03-24T10:00:00Z")),
            ],
            vec![
                Column::new(1u64, "Backlog").with_tasks(["t4"]),
                Column::new(2u64, "En Progreso").with_tasks(["t1", "t2", "t3"]),
            ],
        );

        let stats = BoardStats::from_snapshot(&snap, now());
        assert_eq!(stats.total_tasks, 4);
        assert_eq!(stats.completed_tasks, 1);
        assert_eq!(stats.blocked_tasks, 2);
        // t3 only carries the label, so it still counts as in progress
        assert_eq!(stats.in_progress_tasks, 2);
        assert_eq!(stats.completion_rate, 25.0);
    }

    #[test]
    fn test_first_progress_column_wins() {
        let snap = snapshot(
            vec![task("t1", "2025-03-20T10:00:00Z")],
            vec![
                Column::new(1u64, "In Progress"),
                Column::new(2u64, "Also in progress").with_tasks(["t1"]),
            ],
        );
        assert_eq!(BoardStats::from_snapshot(&snap, now()).in_progress_tasks, 0);
    }

    #[test]
    fn test_priority_distribution_ignores_unrecognized() {
        let snap = snapshot(
            vec![
                task("t1", "2025-03-20T10:00:00Z").with_priority(Priority::High),
                task("t2", "2025-03-20T10:00:00Z").with_priority(Priority::Low),
                task("t3", "2025-03-20T10:00:00Z").with_priority(Priority::Unrecognized),
                task("t4", "2025-03-20T10:00:00Z"),
            ],
            vec![],
        );

        let stats = BoardStats::from_snapshot(&snap, now());
        assert_eq!(
            stats.tasks_by_priority,
            PriorityCounts {
                high: 1,
                medium: 0,
                low: 1
            }
        );
        assert!(stats.tasks_by_priority.total() <= stats.total_tasks);
    }

    #[test]
    fn test_member_precedence_completed_over_blocked() {
        let snap = snapshot(
            vec![
                task("t1", "2025-03-20T10:00:00Z")
                    .with_members(["user-1"])
                    .mark_blocked()
                    .mark_completed(Timestamp::from("2025-03-21T10:00:00Z")),
                task("t2", "2025-03-20T10:00:00Z")
                    .with_members(["user-1"])
                    .mark_blocked(),
                task("t3", "2025-03-20T10:00:00Z").with_members(["user-1", "user-2"]),
            ],
            vec![Column::new(1u64, "In Progress").with_tasks(["t3"])],
        );

        let stats = BoardStats::from_snapshot(&snap, now());
        let ana = stats.tasks_by_member[&UserId::from("user-1")];
        assert_eq!(
            ana,
            MemberStats {
                total: 3,
                completed: 1,
                in_progress: 1,
                blocked: 1
            }
        );
        assert_eq!(stats.tasks_by_member[&UserId::from("user-2")].in_progress, 1);
    }

    #[test]
    fn test_member_in_progress_ignores_spanish_title() {
        let snap = snapshot(
            vec![task("t1", "2025-03-20T10:00:00Z").with_members(["user-1"])],
            vec![Column::new(1u64, "En Progreso").with_tasks(["t1"])],
        );

        let stats = BoardStats::from_snapshot(&snap, now());
        assert_eq!(stats.in_progress_tasks, 1);
        assert_eq!(stats.tasks_by_member[&UserId::from("user-1")].in_progress, 0);
    }

    #[test]
    fn test_time_totals() {
        let snap = snapshot(
            vec![
                task("t1", "2025-03-20T10:00:00Z")
                    .with_estimate(5.0)
                    .mark_completed(Timestamp::from("2025-03-21T10:00:00Z")),
                task("t2", "2025-03-20T10:00:00Z").with_estimate(3.0),
            ],
            vec![],
        );

        let time = BoardStats::from_snapshot(&snap, now()).time_stats;
        assert_eq!(time.total_estimated, 8.0);
        assert_eq!(time.total_completed, 5.0);
        assert_eq!(time.average_task_time, 5.0);
    }

    #[test]
    fn test_average_task_time_without_completed_is_zero() {
        let snap = snapshot(
            vec![task("t1", "2025-03-20T10:00:00Z").with_estimate(3.0)],
            vec![],
        );
        let time = BoardStats::from_snapshot(&snap, now()).time_stats;
        assert_eq!(time.average_task_time, 0.0);
        assert!(!time.average_task_time.is_nan());
    }

    #[test]
    fn test_column_stats() {
        let snap = snapshot(
            vec![
                task("t1", "2025-03-20T10:00:00Z")
                    .with_estimate(4.0)
                    .with_members(["user-1"])
                    .with_priority(Priority::Medium)
                    .mark_blocked()
                    .mark_completed(Timestamp::from("2025-03-25T10:00:00Z"))
                    .updated(Timestamp::from("2025-03-25T10:00:00Z")),
                task("t2", "2025-03-22T10:00:00Z")
                    .with_estimate(2.0)
                    .with_members(["user-1"])
                    .updated(Timestamp::from("2025-03-25T08:00:00Z")),
            ],
            vec![Column::new(7u64, "Review").with_tasks(["t1", "missing", "t2"])],
        );

        let stats = BoardStats::from_snapshot(&snap, now());
        let column = &stats.column_stats[0];
        assert_eq!(column.id, ColumnId::new(7));
        assert_eq!(column.name, "Review");

        let detail = &column.stats;
        assert_eq!(detail.total_tasks, 2);
        assert_eq!(detail.completed_tasks, 1);
        assert_eq!(detail.blocked_tasks, 1);
        assert_eq!(detail.tasks_by_priority.medium, 1);
        assert_eq!(
            detail.member_stats[&UserId::from("user-1")],
            ColumnMemberStats {
                count: 2,
                completed: 1,
                blocked: 1
            }
        );
        assert_eq!(detail.estimated_points, 6.0);
        assert_eq!(detail.completed_points, 4.0);
        assert_eq!(detail.average_task_time, 4.0);
        // 2h and 4h since last update
        assert_eq!(detail.average_time_in_column, 3.0);
        assert_eq!(detail.oldest_task, Some(at("2025-03-20T10:00:00Z")));
        assert_eq!(detail.newest_task, Some(at("2025-03-22T10:00:00Z")));
    }

    #[test]
    fn test_empty_column() {
        let snap = snapshot(vec![], vec![Column::new(1u64, "Empty").with_tasks(["gone"])]);
        let detail = &BoardStats::from_snapshot(&snap, now()).column_stats[0].stats;
        assert_eq!(detail.total_tasks, 0);
        assert_eq!(detail.average_task_time, 0.0);
        assert_eq!(detail.average_time_in_column, 0.0);
        assert!(detail.oldest_task.is_none());
        assert!(detail.newest_task.is_none());
    }

    #[test]
    fn test_recent_activity_window() {
        let mut commented = task("t1", "2025-03-24T10:00:00Z");
        commented.comments.push(Comment::new(
            "old news",
            "user-1",
            Timestamp::from("2025-01-01T00:00:00Z"),
        ));
        let snap = snapshot(
            vec![
                commented,
                // exactly seven days before now is outside the window
                task("t2", "2025-03-18T12:00:00Z"),
                task("t3", "2025-03-01T10:00:00Z")
                    .mark_completed(Timestamp::from("2025-03-19T10:00:00Z")),
                task("t4", "2025-03-01T10:00:00Z")
                    .mark_completed(Timestamp::from("2025-03-10T10:00:00Z")),
            ],
            vec![],
        );

        let recent = BoardStats::from_snapshot(&snap, now()).recent_activity;
        assert_eq!(recent.new_tasks, 1);
        assert_eq!(recent.completed_tasks, 1);
        assert_eq!(recent.comments, 1);
    }

    #[tokio::test]
    async fn test_execute_unknown_board() {
        let ctx = BoardContext::new(Latency::none());
        let result = ComputeBoardStats::new(42u64).execute(&ctx).await;
        assert!(!result.should_log());

        let value = result.into_result().unwrap();
        assert_eq!(value["totalTasks"], 0);
        assert_eq!(value["completionRate"], 0.0);
        assert_eq!(value["columnStats"], serde_json::json!([]));
    }

    #[tokio::test]
    async fn test_json_field_names() {
        let ctx = BoardContext::seeded(Latency::none());
        let value = ComputeBoardStats::new(1u64)
            .execute(&ctx)
            .await
            .into_result()
            .unwrap();

        assert!(value["tasksByMember"]["user-2"]["inProgress"].is_number());
        assert!(value["columnStats"][0]["stats"]["averageTimeInColumn"].is_number());
        assert!(value["timeStats"]["averageTaskTime"].is_number());
        assert!(value["recentActivity"]["newTasks"].is_number());
    }
}
