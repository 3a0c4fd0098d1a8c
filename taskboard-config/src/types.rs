//! Configuration value types

use serde::{Deserialize, Serialize};

/// Root configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaskboardConfig {
    pub latency: LatencyConfig,
    pub log: LogConfig,
}

/// Simulated latency per operation family, in milliseconds.
///
/// Zero disables the delay entirely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LatencyConfig {
    /// Board, column, task, checklist, comment, label, user and analytics calls
    pub default_ms: u64,
    pub login_ms: u64,
    pub logout_ms: u64,
    /// Description polishing and time estimation
    pub assist_ms: u64,
    /// Subtask generation
    pub subtasks_ms: u64,
}

impl Default for LatencyConfig {
    fn default() -> Self {
        Self {
            default_ms: 300,
            login_ms: 800,
            logout_ms: 300,
            assist_ms: 1000,
            subtasks_ms: 1500,
        }
    }
}

impl LatencyConfig {
    /// Every delay set to zero
    pub fn none() -> Self {
        Self {
            default_ms: 0,
            login_ms: 0,
            logout_ms: 0,
            assist_ms: 0,
            subtasks_ms: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// `tracing_subscriber::EnvFilter` directive used when `RUST_LOG` is unset
    pub level: String,
    /// Colored output
    pub ansi: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            ansi: true,
        }
    }
}
