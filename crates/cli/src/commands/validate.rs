//! `validate` command implementation.

use anyhow::{Context, Result};
use config_loader::{validator, ConfigLoader};
use contracts::Settings;
use serde::Serialize;
use tracing::info;

use crate::cli::ValidateArgs;

/// Validation result for JSON output
#[derive(Serialize)]
struct ValidationResult {
    valid: bool,
    config_path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    warnings: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    summary: Option<ConfigSummary>,
}

#[derive(Serialize)]
struct ConfigSummary {
    resolution: String,
    rotation: i32,
    exposure: String,
    awb: String,
    stream_key_set: bool,
    verbose: bool,
}

impl From<&Settings> for ConfigSummary {
    fn from(settings: &Settings) -> Self {
        Self {
            resolution: format!("{}x{}", settings.video_width, settings.video_height),
            rotation: settings.video_rotation,
            exposure: settings.video_exposure.clone(),
            awb: settings.video_awb.clone(),
            stream_key_set: !settings.youtube_stream_key.is_empty(),
            verbose: settings.is_verbose,
        }
    }
}

/// Execute the `validate` command
pub fn run_validate(args: &ValidateArgs) -> Result<()> {
    let config_path = ConfigLoader::config_path().context("Failed to locate configuration")?;
    info!(config = %config_path.display(), "Validating configuration");

    let result = validate_config(&config_path);

    if args.json {
        let json = serde_json::to_string_pretty(&result)
            .context("Failed to serialize validation result")?;
        println!("{}", json);
    } else {
        print_validation_result(&result);
    }

    if result.valid {
        Ok(())
    } else {
        anyhow::bail!("Configuration validation failed")
    }
}

fn validate_config(path: &std::path::Path) -> ValidationResult {
    let config_path = path.display().to_string();

    match ConfigLoader::load_from_path(path) {
        Ok(settings) => {
            let warnings = validator::collect_warnings(&settings);
            ValidationResult {
                valid: true,
                config_path,
                error: None,
                warnings: if warnings.is_empty() {
                    None
                } else {
                    Some(warnings)
                },
                summary: Some(ConfigSummary::from(&settings)),
            }
        }
        Err(e) => ValidationResult {
            valid: false,
            config_path,
            error: Some(e.to_string()),
            warnings: None,
            summary: None,
        },
    }
}

fn print_validation_result(result: &ValidationResult) {
    if result.valid {
        println!("✓ Configuration is valid: {}", result.config_path);

        if let Some(ref summary) = result.summary {
            println!("\n  Resolution: {}", summary.resolution);
            println!("  Rotation: {}", summary.rotation);
            println!("  Exposure: {}", summary.exposure);
            println!("  White balance: {}", summary.awb);
            println!("  Stream key set: {}", summary.stream_key_set);
            println!("  Verbose: {}", summary.verbose);
        }

        if let Some(ref warnings) = result.warnings {
            println!("\n⚠ Warnings:");
            for warning in warnings {
                println!("  - {}", warning);
            }
        }
    } else {
        println!("✗ Configuration is invalid: {}", result.config_path);
        if let Some(ref error) = result.error {
            println!("\n  Error: {}", error);
        }
    }
}
