//! `run` command implementation.

use anyhow::{Context, Result};
use config_loader::{validator, ConfigLoader};
use launcher::{Pipeline, PipelineConfig};
use tracing::{info, warn};

/// Execute the `run` command
///
/// Config errors and start failures are returned (non-zero exit). An
/// unsuccessful ffmpeg exit has already been logged by the pipeline and ends
/// the command normally.
pub async fn run_stream() -> Result<()> {
    let config_path = ConfigLoader::config_path().context("Failed to locate configuration")?;
    info!(config = %config_path.display(), "Loading configuration");

    let settings = ConfigLoader::load_from_path(&config_path)
        .with_context(|| format!("Failed to load config from {}", config_path.display()))?;

    info!(
        width = settings.video_width,
        height = settings.video_height,
        rotation = settings.video_rotation,
        exposure = %settings.video_exposure,
        awb = %settings.video_awb,
        verbose = settings.is_verbose,
        "Configuration loaded"
    );

    for warning in validator::collect_warnings(&settings) {
        warn!("{}", warning);
    }

    let stats = Pipeline::new(PipelineConfig::new(settings))
        .run()
        .await
        .context("Pipeline execution failed")?;

    stats.log_summary();
    Ok(())
}
