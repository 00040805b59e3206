//! # picam-streamer
//!
//! 命令行接口入口点。
//!
//! 提供：
//! - 读取可执行文件旁的 config.json
//! - 启动 raspivid | ffmpeg 推流管道
//! - 配置校验与信息展示

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use cli::{Cli, Commands};
use commands::{run_info, run_stream, run_validate};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let command = cli.command.clone().unwrap_or(Commands::Run);

    // Initialize logging based on CLI options
    init_logging(&cli, matches!(command, Commands::Run))?;

    info!(
        version = env!("CARGO_PKG_VERSION"),
        "picam-streamer starting"
    );

    // Execute command
    let result = match &command {
        Commands::Run => run_stream().await,
        Commands::Validate(args) => run_validate(args),
        Commands::Info(args) => run_info(args),
    };

    if let Err(ref e) = result {
        tracing::error!(error = %e, "Command failed");
    }

    result
}

/// Initialize logging based on CLI options
///
/// The metrics exporter is only started for `run`.
fn init_logging(cli: &Cli, streaming: bool) -> Result<()> {
    let default_log_level = if cli.quiet {
        "warn"
    } else {
        match cli.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };

    observability::init_with_config(observability::ObservabilityConfig {
        log_format: cli.log_format.into(),
        metrics_port: (streaming && cli.metrics_port != 0).then_some(cli.metrics_port),
        default_log_level: default_log_level.to_string(),
    })
}
