//! BoardContext - access to the in-memory store
//!
//! The context owns the store handle, the simulated latency profile, the
//! clock and the session storage. It offers data access primitives only;
//! commands do the work.

use crate::auth::{MemorySessionStorage, SessionStorage};
use crate::clock::{Clock, SystemClock};
use crate::error::{BoardError, Result};
use crate::types::{
    Board, BoardId, Column, ColumnId, Label, Task, TaskId, Timestamp, User, UserId,
};
use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use taskboard_config::LatencyConfig;
use taskboard_operations::LogEntry;
use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::trace;

/// Everything the board application knows, keyed the way callers look it up
#[derive(Debug, Default, Clone)]
pub struct Store {
    pub boards: Vec<Board>,
    pub columns: HashMap<BoardId, Vec<Column>>,
    /// Tasks per board, in insertion order
    pub tasks: HashMap<BoardId, IndexMap<TaskId, Task>>,
    pub users: Vec<User>,
    /// Custom labels; boards without an entry use [`Label::defaults`]
    pub labels: HashMap<BoardId, Vec<Label>>,
    /// Logged operations, oldest first
    pub activity: Vec<LogEntry>,
}

impl Store {
    pub fn board(&self, id: BoardId) -> Option<&Board> {
        self.boards.iter().find(|b| b.id == id)
    }

    pub fn board_mut(&mut self, id: BoardId) -> Option<&mut Board> {
        self.boards.iter_mut().find(|b| b.id == id)
    }

    pub fn task(&self, board: BoardId, id: &TaskId) -> Option<&Task> {
        self.tasks.get(&board).and_then(|tasks| tasks.get(id))
    }

    pub fn task_mut(&mut self, board: BoardId, id: &TaskId) -> Option<&mut Task> {
        self.tasks.get_mut(&board).and_then(|tasks| tasks.get_mut(id))
    }

    pub fn require_board(&self, id: BoardId) -> Result<&Board> {
        self.board(id).ok_or_else(|| BoardError::board_not_found(id))
    }

    pub fn require_board_mut(&mut self, id: BoardId) -> Result<&mut Board> {
        self.board_mut(id).ok_or_else(|| BoardError::board_not_found(id))
    }

    pub fn require_task(&self, board: BoardId, id: &TaskId) -> Result<&Task> {
        self.task(board, id)
            .ok_or_else(|| BoardError::task_not_found(id))
    }

    pub fn require_task_mut(&mut self, board: BoardId, id: &TaskId) -> Result<&mut Task> {
        self.task_mut(board, id)
            .ok_or_else(|| BoardError::task_not_found(id))
    }

    /// Column list of a board; a board without one is reported as not found
    pub fn require_columns_mut(&mut self, board: BoardId) -> Result<&mut Vec<Column>> {
        self.columns
            .get_mut(&board)
            .ok_or_else(|| BoardError::board_not_found(board))
    }

    pub fn user(&self, id: &UserId) -> Option<&User> {
        self.users.iter().find(|u| &u.id == id)
    }

    /// Insert a task and list it at the end of a column
    pub fn insert_task(&mut self, board: BoardId, column_id: ColumnId, task: Task) -> Result<()> {
        let column = self
            .require_columns_mut(board)?
            .iter_mut()
            .find(|c| c.id == column_id)
            .ok_or_else(|| BoardError::column_not_found(column_id))?;
        column.task_ids.push(task.id.clone());
        self.tasks.entry(board).or_default().insert(task.id.clone(), task);
        Ok(())
    }
}

/// The tasks and columns of one board, read under a single lock
#[derive(Debug, Clone, Default)]
pub struct BoardSnapshot {
    pub tasks: IndexMap<TaskId, Task>,
    pub columns: Vec<Column>,
}

impl BoardSnapshot {
    /// Resolve a column's task ids, skipping ids with no task behind them
    pub fn tasks_for_column<'a>(&'a self, column: &'a Column) -> impl Iterator<Item = &'a Task> {
        resolve_column(&self.tasks, column)
    }
}

fn resolve_column<'a>(
    tasks: &'a IndexMap<TaskId, Task>,
    column: &'a Column,
) -> impl Iterator<Item = &'a Task> {
    column.task_ids.iter().filter_map(move |id| tasks.get(id))
}

/// Which simulated delay an operation waits for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LatencyKind {
    Default,
    Login,
    Logout,
    Assist,
    Subtasks,
}

/// Artificial per-call delays
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Latency {
    config: LatencyConfig,
}

impl Latency {
    pub fn new(config: LatencyConfig) -> Self {
        Self { config }
    }

    /// No delays at all
    pub fn none() -> Self {
        Self::new(LatencyConfig::none())
    }

    pub fn duration(&self, kind: LatencyKind) -> Duration {
        let ms = match kind {
            LatencyKind::Default => self.config.default_ms,
            LatencyKind::Login => self.config.login_ms,
            LatencyKind::Logout => self.config.logout_ms,
            LatencyKind::Assist => self.config.assist_ms,
            LatencyKind::Subtasks => self.config.subtasks_ms,
        };
        Duration::from_millis(ms)
    }
}

impl Default for Latency {
    fn default() -> Self {
        Self::new(LatencyConfig::default())
    }
}

/// Handle passed to every command. Cloning shares the same store.
#[derive(Debug, Clone)]
pub struct BoardContext {
    store: Arc<RwLock<Store>>,
    latency: Latency,
    clock: Arc<dyn Clock>,
    session: Arc<dyn SessionStorage>,
}

impl BoardContext {
    /// An empty store
    pub fn new(latency: Latency) -> Self {
        Self::with_store(Store::default(), latency)
    }

    /// A store holding the demo boards, users and tasks
    pub fn seeded(latency: Latency) -> Self {
        Self::with_store(crate::seed::demo_store(), latency)
    }

    pub fn with_store(store: Store, latency: Latency) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
            latency,
            clock: Arc::new(SystemClock),
            session: Arc::new(MemorySessionStorage::new()),
        }
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn with_session_storage(mut self, session: Arc<dyn SessionStorage>) -> Self {
        self.session = session;
        self
    }

    // =========================================================================
    // Environment
    // =========================================================================

    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    /// Current time as a stored timestamp
    pub fn timestamp(&self) -> Timestamp {
        Timestamp::from_datetime(self.now())
    }

    pub fn latency(&self) -> &Latency {
        &self.latency
    }

    pub fn session(&self) -> &dyn SessionStorage {
        self.session.as_ref()
    }

    /// Wait out the configured delay; returns immediately when it is zero
    pub async fn simulate_latency(&self, kind: LatencyKind) {
        let delay = self.latency.duration(kind);
        if delay.is_zero() {
            return;
        }
        trace!(?kind, delay_ms = delay.as_millis() as u64, "simulating latency");
        tokio::time::sleep(delay).await;
    }

    // =========================================================================
    // Store access
    // =========================================================================

    pub async fn read(&self) -> RwLockReadGuard<'_, Store> {
        self.store.read().await
    }

    pub async fn write(&self) -> RwLockWriteGuard<'_, Store> {
        self.store.write().await
    }

    /// Tasks of a board by id; empty for an unknown board
    pub async fn read_tasks(&self, board: BoardId) -> IndexMap<TaskId, Task> {
        self.read().await.tasks.get(&board).cloned().unwrap_or_default()
    }

    /// Columns of a board in order; empty for an unknown board
    pub async fn read_columns(&self, board: BoardId) -> Vec<Column> {
        self.read().await.columns.get(&board).cloned().unwrap_or_default()
    }

    /// Tasks listed by `column`, dangling ids skipped
    pub async fn read_tasks_for_column(&self, board: BoardId, column: &Column) -> Vec<Task> {
        let store = self.read().await;
        match store.tasks.get(&board) {
            Some(tasks) => resolve_column(tasks, column).cloned().collect(),
            None => Vec::new(),
        }
    }

    /// Tasks and columns of a board from one consistent read
    pub async fn snapshot(&self, board: BoardId) -> BoardSnapshot {
        let store = self.read().await;
        BoardSnapshot {
            tasks: store.tasks.get(&board).cloned().unwrap_or_default(),
            columns: store.columns.get(&board).cloned().unwrap_or_default(),
        }
    }

    // =========================================================================
    // Activity
    // =========================================================================

    pub async fn append_activity(&self, entry: LogEntry) {
        self.write().await.activity.push(entry);
    }

    /// Activity entries, newest first
    pub async fn read_activity(&self, limit: Option<usize>) -> Vec<LogEntry> {
        let store = self.read().await;
        let newest_first = store.activity.iter().rev().cloned();
        match limit {
            Some(n) => newest_first.take(n).collect(),
            None => newest_first.collect(),
        }
    }
}

impl Default for BoardContext {
    fn default() -> Self {
        Self::new(Latency::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use chrono::TimeZone;
    use serde_json::json;

    fn board_with_dangling() -> Store {
        let now = Timestamp::from("2025-03-20T10:00:00Z");
        let mut store = Store::default();
        let board = BoardId::new(1);
        let column = ColumnId::new(1);
        store.columns.insert(board, vec![Column::new(column, "Backlog")]);
        store
            .insert_task(board, column, Task::new("A", now.clone()).with_id("task-a"))
            .unwrap();
        store.columns.get_mut(&board).unwrap()[0]
            .task_ids
            .push(TaskId::from("task-gone"));
        store
            .insert_task(board, column, Task::new("B", now).with_id("task-b"))
            .unwrap();
        store
    }

    #[tokio::test]
    async fn test_unknown_board_reads_empty() {
        let ctx = BoardContext::new(Latency::none());
        assert!(ctx.read_tasks(BoardId::new(99)).await.is_empty());
        assert!(ctx.read_columns(BoardId::new(99)).await.is_empty());
        let snapshot = ctx.snapshot(BoardId::new(99)).await;
        assert!(snapshot.tasks.is_empty() && snapshot.columns.is_empty());
    }

    #[tokio::test]
    async fn test_read_tasks_for_column_skips_dangling() {
        let ctx = BoardContext::with_store(board_with_dangling(), Latency::none());
        let columns = ctx.read_columns(BoardId::new(1)).await;
        assert_eq!(columns[0].task_ids.len(), 3);

        let tasks = ctx.read_tasks_for_column(BoardId::new(1), &columns[0]).await;
        let ids: Vec<_> = tasks.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, ["task-a", "task-b"]);
    }

    #[tokio::test]
    async fn test_timestamp_uses_clock() {
        let at = Utc.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap();
        let ctx = BoardContext::new(Latency::none()).with_clock(Arc::new(ManualClock::new(at)));
        assert_eq!(ctx.timestamp().as_str(), "2025-01-02T03:04:05.000Z");
    }

    #[tokio::test]
    async fn test_activity_newest_first() {
        let ctx = BoardContext::new(Latency::none());
        ctx.append_activity(LogEntry::new("add board", json!({}), json!({}), None, 0))
            .await;
        ctx.append_activity(LogEntry::new("add task", json!({}), json!({}), None, 0))
            .await;

        let entries = ctx.read_activity(None).await;
        assert_eq!(entries[0].op, "add task");
        assert_eq!(entries[1].op, "add board");
        assert_eq!(ctx.read_activity(Some(1)).await.len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_latency_waits_configured_delay() {
        let ctx = BoardContext::new(Latency::default());
        let start = tokio::time::Instant::now();
        ctx.simulate_latency(LatencyKind::Login).await;
        assert!(start.elapsed() >= Duration::from_millis(800));
    }

    #[test]
    fn test_latency_none_is_zero() {
        let latency = Latency::none();
        assert!(latency.duration(LatencyKind::Default).is_zero());
        assert!(latency.duration(LatencyKind::Subtasks).is_zero());
    }
}
