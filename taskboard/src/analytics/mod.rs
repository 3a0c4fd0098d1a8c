//! Read-only analytics over a board: statistics, velocity and timeline.
//!
//! Each command takes a consistent snapshot of the board, so results never
//! mix state from before and after a concurrent mutation. Unknown boards
//! produce empty results rather than errors.

mod stats;
mod timeline;
mod velocity;

pub use stats::{
    BoardStats, ColumnMemberStats, ColumnStats, ColumnStatsDetail, ComputeBoardStats,
    MemberStats, PriorityCounts, RecentActivity, TimeStats,
};
pub use timeline::{build_timeline, EventKind, GetBoardTimeline, TimelineEvent};
pub use velocity::{ComputeVelocityMetrics, VelocityMetrics, WeekProgress};
