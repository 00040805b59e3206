//! `info` command implementation.

use anyhow::{Context, Result};
use config_loader::ConfigLoader;
use contracts::Settings;
use launcher::ProcessSpec;
use serde::Serialize;
use tracing::info;

use crate::cli::InfoArgs;

/// Configuration info for JSON output
#[derive(Serialize)]
struct ConfigInfo {
    config_path: String,
    settings: Settings,
    commands: Vec<CommandInfo>,
}

#[derive(Serialize)]
struct CommandInfo {
    name: String,
    program: String,
    args: Vec<String>,
}

impl From<&ProcessSpec> for CommandInfo {
    fn from(spec: &ProcessSpec) -> Self {
        Self {
            name: spec.name.to_string(),
            program: spec.program.display().to_string(),
            args: spec.args.clone(),
        }
    }
}

/// Execute the `info` command
pub fn run_info(args: &InfoArgs) -> Result<()> {
    let config_path = ConfigLoader::config_path().context("Failed to locate configuration")?;
    info!(config = %config_path.display(), "Loading configuration info");

    let settings = ConfigLoader::load_from_path(&config_path)
        .with_context(|| format!("Failed to load config from {}", config_path.display()))?;
    let settings = displayed_settings(settings, args.show_key);

    let capture = ProcessSpec::capture(&settings);
    let transcoder = ProcessSpec::transcoder(&settings);

    if args.json {
        let info = ConfigInfo {
            config_path: config_path.display().to_string(),
            commands: vec![CommandInfo::from(&capture), CommandInfo::from(&transcoder)],
            settings,
        };
        let json =
            serde_json::to_string_pretty(&info).context("Failed to serialize config info")?;
        println!("{}", json);
    } else {
        println!("\n=== Configuration ===\n");
        println!("  File: {}", config_path.display());
        println!(
            "  Resolution: {}x{}",
            settings.video_width, settings.video_height
        );
        println!("  Rotation: {}", settings.video_rotation);
        println!("  Exposure: {}", settings.video_exposure);
        println!("  White balance: {}", settings.video_awb);
        println!("  Stream key: {}", settings.youtube_stream_key);
        println!("  Verbose: {}", settings.is_verbose);
        println!("\n=== Pipeline ===\n");
        println!("  {} \\", capture);
        println!("    | {}", transcoder);
        println!();
    }

    Ok(())
}

/// Settings as printed; the stream key is masked unless `show_key`
fn displayed_settings(mut settings: Settings, show_key: bool) -> Settings {
    if !show_key {
        settings.youtube_stream_key = settings.masked_stream_key();
    }
    settings
}
