//! CLI definition for the taskboard command-line interface.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// How results are printed
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
}

/// Taskboard - reports over the demo board data
#[derive(Parser, Debug)]
#[command(name = "taskboard")]
#[command(version)]
#[command(about = "Board statistics, velocity and timelines for the demo taskboard")]
pub struct Cli {
    /// Extra configuration file merged after the discovered ones
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Skip the simulated latency
    #[arg(long, global = true)]
    pub no_latency: bool,

    /// Enable debug output to stderr
    #[arg(short, long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List every board
    Boards,
    /// Show a board's columns with their tasks
    Columns {
        /// Board ID
        #[arg(short, long, default_value_t = 1)]
        board: u64,
    },
    /// Aggregate statistics for a board
    Stats {
        /// Board ID
        #[arg(short, long, default_value_t = 1)]
        board: u64,
    },
    /// Weekly velocity of a board's completed column
    Velocity {
        /// Board ID
        #[arg(short, long, default_value_t = 1)]
        board: u64,
    },
    /// Task events of a board, newest first
    Timeline {
        /// Board ID
        #[arg(short, long, default_value_t = 1)]
        board: u64,
        /// Show at most this many events
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// List all users
    Users,
}
