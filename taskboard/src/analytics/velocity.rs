//! ComputeVelocityMetrics command

use crate::context::{BoardContext, BoardSnapshot, LatencyKind};
use crate::error::{BoardError, Result};
use crate::processor::unlogged;
use crate::types::BoardId;
use chrono::Datelike;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use taskboard_operations::{async_trait, operation, Execute, ExecutionResult};
use tracing::{debug, warn};

/// Title of the column whose tasks count as delivered
const COMPLETED_COLUMN: &str = "completed";

/// Delivered work in one week bucket
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekProgress {
    pub count: usize,
    pub points: f64,
    /// `YYYY-MM-DD` of the first task seen in the bucket
    pub week: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VelocityMetrics {
    /// Buckets in the order they were first seen
    pub weekly_progress: Vec<WeekProgress>,
    pub average_velocity: f64,
    pub total_completed_points: f64,
}

impl VelocityMetrics {
    /// Group the tasks of the "completed" column by week.
    ///
    /// A week is `(year, day_of_month / 7)` of the task's last update in UTC,
    /// so buckets restart every month and day 28+ of a month forms its own
    /// bucket. This is not an ISO week.
    pub fn from_snapshot(snapshot: &BoardSnapshot) -> Self {
        let Some(column) = snapshot
            .columns
            .iter()
            .find(|c| c.title_is(COMPLETED_COLUMN))
        else {
            return Self::default();
        };

        let mut buckets: IndexMap<(i32, u32), WeekProgress> = IndexMap::new();
        for task in snapshot.tasks_for_column(column) {
            let Some(updated) = task.updated_at.parse() else {
                warn!(task = %task.id, updated_at = %task.updated_at, "skipping unparseable timestamp");
                continue;
            };

            let bucket = buckets
                .entry((updated.year(), updated.day() / 7))
                .or_insert_with(|| WeekProgress {
                    count: 0,
                    points: 0.0,
                    week: updated.date_naive().to_string(),
                });
            bucket.count += 1;
            bucket.points += task.time_estimation;
        }

        let weekly_progress: Vec<WeekProgress> = buckets.into_values().collect();
        let total_completed_points: f64 = weekly_progress.iter().map(|w| w.points).sum();
        let average_velocity = if weekly_progress.is_empty() {
            0.0
        } else {
            total_completed_points / weekly_progress.len() as f64
        };

        Self {
            weekly_progress,
            average_velocity,
            total_completed_points,
        }
    }
}

/// Compute weekly velocity from the completed column
#[operation(
    verb = "compute",
    noun = "velocity",
    description = "Compute weekly velocity for a board"
)]
#[derive(Debug, Deserialize, Serialize)]
pub struct ComputeVelocityMetrics {
    /// The board to analyze
    pub board_id: BoardId,
}

impl ComputeVelocityMetrics {
    pub fn new(board_id: impl Into<BoardId>) -> Self {
        Self {
            board_id: board_id.into(),
        }
    }

    pub async fn compute(&self, ctx: &BoardContext) -> VelocityMetrics {
        ctx.simulate_latency(LatencyKind::Default).await;

        let snapshot = ctx.snapshot(self.board_id).await;
        let metrics = VelocityMetrics::from_snapshot(&snapshot);

        debug!(
            board_id = %self.board_id,
            weeks = metrics.weekly_progress.len(),
            points = metrics.total_completed_points,
            "computed velocity"
        );
        metrics
    }
}

#[async_trait]
impl Execute<BoardContext, BoardError> for ComputeVelocityMetrics {
    async fn execute(&self, ctx: &BoardContext) -> ExecutionResult<Value, BoardError> {
        let result: Result<Value> = async {
            let metrics = self.compute(ctx).await;
            Ok(serde_json::to_value(metrics)?)
        }
        .await;

        unlogged(result)
    }
}
