//! # Launcher
//!
//! Builds the `raspivid` and `ffmpeg` invocations from `Settings` and runs
//! them as a producer/consumer pair joined by an OS pipe.
//!
//! ```no_run
//! # async fn demo() -> Result<(), launcher::LaunchError> {
//! use contracts::Settings;
//! use launcher::{Pipeline, PipelineConfig};
//!
//! let settings = Settings::default();
//! let stats = Pipeline::new(PipelineConfig::new(settings)).run().await?;
//! stats.log_summary();
//! # Ok(())
//! # }
//! ```

mod args;
mod error;
mod process;
mod runner;
mod stats;

pub use args::{capture_args, stream_url, transcoder_args};
pub use error::{LaunchError, Result};
pub use process::ProcessSpec;
pub use runner::{Pipeline, PipelineConfig};
pub use stats::{ExitOutcome, PipelineStats, ProcessReport};
