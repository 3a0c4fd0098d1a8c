//! Taskboard configuration using Figment
//!
//! Configuration is layered, later sources overriding earlier ones:
//!
//! 1. Built-in defaults ([`TaskboardConfig::default`])
//! 2. Global file: `~/.taskboard/taskboard.{toml,yaml,yml,json}`
//! 3. Project file: `./.taskboard/taskboard.{toml,yaml,yml,json}`
//! 4. Environment variables prefixed `TASKBOARD_`, nested keys split on `__`
//!    (e.g. `TASKBOARD_LATENCY__DEFAULT_MS=0`)
//!
//! ```no_run
//! let config = taskboard_config::load_configuration()?;
//! println!("default latency: {}ms", config.latency.default_ms);
//! # Ok::<(), taskboard_config::ConfigError>(())
//! ```
//!
//! ## Example TOML
//!
//! ```toml
//! [latency]
//! default_ms = 0
//! login_ms = 0
//!
//! [log]
//! level = "debug"
//! ```

mod discovery;
mod error;
mod provider;
mod types;

pub use discovery::{ConfigFile, ConfigFormat, ConfigScope, FileDiscovery};
pub use error::{ConfigError, ConfigResult};
pub use provider::ConfigProvider;
pub use types::{LatencyConfig, LogConfig, TaskboardConfig};

/// Load configuration from every source with the standard precedence
pub fn load_configuration() -> ConfigResult<TaskboardConfig> {
    ConfigProvider::new().load()
}
