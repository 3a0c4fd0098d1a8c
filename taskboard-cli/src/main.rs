//! Taskboard CLI
//!
//! Runs read-only reports against the built-in demo data:
//! - `taskboard boards`: list boards
//! - `taskboard columns --board 1`: columns with their tasks
//! - `taskboard stats --board 1`: board statistics
//! - `taskboard velocity --board 1`: weekly velocity
//! - `taskboard timeline --board 1 --limit 10`: recent task events
//! - `taskboard users`: list users
//!
//! Exit codes: 0 on success, 1 on error.

use anyhow::Context;
use clap::Parser;
use serde_json::Value;
use taskboard::{
    analytics::{ComputeBoardStats, ComputeVelocityMetrics, GetBoardTimeline},
    board::ListBoards,
    column::ListColumnTasks,
    user::ListUsers,
    BoardContext, BoardOperationProcessor, Latency, OperationProcessor,
};
use taskboard_config::{ConfigProvider, TaskboardConfig};
use tracing_subscriber::EnvFilter;

mod cli;

use cli::{Cli, Commands, OutputFormat};

/// Load configuration, falling back to defaults when it cannot be read
fn load_cli_configuration(cli: &Cli) -> TaskboardConfig {
    let provider = match &cli.config {
        Some(path) => ConfigProvider::new().with_file(path),
        None => ConfigProvider::new(),
    };
    match provider.load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Warning: Configuration loading failed: {}", e);
            eprintln!("Continuing with default configuration...");
            TaskboardConfig::default()
        }
    }
}

fn init_tracing(cli: &Cli, config: &TaskboardConfig) {
    let filter = if cli.debug {
        EnvFilter::new("taskboard=debug,taskboard_config=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log.level))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(config.log.ansi)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let config = load_cli_configuration(&cli);
    init_tracing(&cli, &config);

    if let Err(e) = run(cli, config).await {
        tracing::error!("{:#}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli, config: TaskboardConfig) -> anyhow::Result<()> {
    let latency = if cli.no_latency {
        Latency::none()
    } else {
        Latency::new(config.latency)
    };
    let ctx = BoardContext::seeded(latency);
    let processor = BoardOperationProcessor::new();

    let value = match cli.command {
        Commands::Boards => processor.process(&ListBoards, &ctx).await?,
        Commands::Columns { board } => processor.process(&ListColumnTasks::new(board), &ctx).await?,
        Commands::Stats { board } => {
            processor.process(&ComputeBoardStats::new(board), &ctx).await?
        }
        Commands::Velocity { board } => {
            processor
                .process(&ComputeVelocityMetrics::new(board), &ctx)
                .await?
        }
        Commands::Timeline { board, limit } => {
            let events = processor.process(&GetBoardTimeline::new(board), &ctx).await?;
            truncate(events, limit)
        }
        Commands::Users => processor.process(&ListUsers, &ctx).await?,
    };

    println!("{}", render(&value, cli.format)?);
    Ok(())
}

fn truncate(value: Value, limit: Option<usize>) -> Value {
    match (value, limit) {
        (Value::Array(mut items), Some(limit)) => {
            items.truncate(limit);
            Value::Array(items)
        }
        (value, _) => value,
    }
}

fn render(value: &Value, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(value).context("rendering JSON"),
        OutputFormat::Yaml => serde_yaml_ng::to_string(value).context("rendering YAML"),
    }
}
