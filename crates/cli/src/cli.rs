//! CLI argument definitions using clap.

use clap::{Parser, Subcommand, ValueEnum};

/// picam-streamer - stream a Raspberry Pi camera to YouTube Live
#[derive(Parser, Debug)]
#[command(
    name = "picam-streamer",
    author,
    version,
    about = "Raspberry Pi camera to YouTube Live streamer",
    long_about = "Pipes raspivid's H.264 output into ffmpeg, which adds a silent audio track \n\
                  and pushes the result to YouTube Live over RTMP.\n\n\
                  Settings are read from config.json next to the executable."
)]
pub struct Cli {
    /// Increase logging verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true, env = "PICAM_STREAMER_VERBOSE")]
    pub verbose: u8,

    /// Suppress all output except warnings and errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log output format
    #[arg(
        long,
        value_enum,
        default_value = "compact",
        global = true,
        env = "PICAM_STREAMER_LOG_FORMAT"
    )]
    pub log_format: LogFormat,

    /// Metrics server port while streaming (0 = disabled)
    #[arg(
        long,
        default_value = "0",
        global = true,
        env = "PICAM_STREAMER_METRICS_PORT"
    )]
    pub metrics_port: u16,

    // no subcommand means `run`
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Start streaming (default)
    Run,

    /// Validate config.json without starting anything
    Validate(ValidateArgs),

    /// Display settings and the resulting command lines
    Info(InfoArgs),
}

/// Arguments for the `validate` command
#[derive(Parser, Debug, Clone)]
pub struct ValidateArgs {
    /// Output validation result as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `info` command
#[derive(Parser, Debug, Clone)]
pub struct InfoArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Print the stream key instead of masking it
    #[arg(long)]
    pub show_key: bool,
}

/// Log output format
#[derive(ValueEnum, Clone, Copy, Debug, Default)]
pub enum LogFormat {
    /// JSON structured logging
    Json,
    /// Human-readable pretty format
    Pretty,
    /// Compact single-line format
    #[default]
    Compact,
}

impl From<LogFormat> for observability::LogFormat {
    fn from(format: LogFormat) -> Self {
        match format {
            LogFormat::Json => Self::Json,
            LogFormat::Pretty => Self::Pretty,
            LogFormat::Compact => Self::Compact,
        }
    }
}
