//! Pipeline runner - starts raspivid and ffmpeg joined by a pipe.
//!
//! The capture process runs on its own task, which owns the pipe's write
//! end for as long as raspivid lives. The main task starts ffmpeg on the
//! read end and waits for it; ffmpeg's exit bounds the run.

use std::path::PathBuf;
use std::time::Instant;

use contracts::Settings;
use observability::{record_process_exited, record_process_started};
use tokio::process::Command;
use tokio::sync::oneshot;
use tracing::{debug, error, info, warn};

use crate::error::{LaunchError, Result};
use crate::process::ProcessSpec;
use crate::stats::{ExitOutcome, PipelineStats, ProcessReport};

/// Pipeline configuration
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Loaded settings
    pub settings: Settings,

    /// Producer: writes H.264 to stdout
    pub capture: ProcessSpec,

    /// Consumer: reads H.264 from stdin
    pub transcoder: ProcessSpec,
}

impl PipelineConfig {
    /// Both processes at their fixed paths
    pub fn new(settings: Settings) -> Self {
        Self {
            capture: ProcessSpec::capture(&settings),
            transcoder: ProcessSpec::transcoder(&settings),
            settings,
        }
    }

    /// Substitute the executables, keeping the argument lists
    pub fn with_programs(
        mut self,
        capture: impl Into<PathBuf>,
        transcoder: impl Into<PathBuf>,
    ) -> Self {
        self.capture = self.capture.with_program(capture);
        self.transcoder = self.transcoder.with_program(transcoder);
        self
    }
}

/// Main pipeline runner
pub struct Pipeline {
    config: PipelineConfig,
}

impl Pipeline {
    /// Create a new pipeline with the given configuration
    pub fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    /// Run until the transcoder exits
    ///
    /// # Errors
    /// - pipe creation failure
    /// - either process failing to start; if raspivid fails, ffmpeg is never started
    ///
    /// An unsuccessful ffmpeg exit is logged and reported in the stats, not returned.
    pub async fn run(self) -> Result<PipelineStats> {
        let start_time = Instant::now();
        let PipelineConfig {
            settings,
            capture,
            transcoder,
        } = self.config;
        let verbose = settings.is_verbose;

        let (read_end, write_end) = std::io::pipe().map_err(LaunchError::Pipe)?;

        let mut capture_command = capture.command();
        capture_command.stdout(write_end);

        let mut transcoder_command = transcoder.command();
        transcoder_command.stdin(read_end);

        let (started_tx, started_rx) = oneshot::channel();
        let capture_task = tokio::spawn(run_capture(
            capture,
            capture_command,
            verbose,
            started_tx,
        ));

        match started_rx.await {
            Ok(Ok(())) => {}
            Ok(Err(e)) => return Err(e),
            Err(_) => {
                return Err(LaunchError::TaskLost {
                    process: contracts::CAPTURE_PROCESS_NAME.to_string(),
                })
            }
        }

        let transcoder_started = Instant::now();
        let mut child = transcoder_command
            .spawn()
            .map_err(|source| LaunchError::process_start(transcoder.name, source))?;
        // Parent's copy of the read end. Without it raspivid gets EPIPE once ffmpeg is gone.
        drop(transcoder_command);

        record_process_started(transcoder.name);
        info!(process = transcoder.name, "{}", transcoder.start_message(verbose));

        let outcome = match child.wait().await {
            Ok(status) => ExitOutcome::Exited(status),
            Err(e) => ExitOutcome::WaitFailed(e.to_string()),
        };
        let transcoder_report =
            ProcessReport::new(transcoder.name, outcome, transcoder_started.elapsed());
        record_process_exited(
            transcoder.name,
            transcoder_report.success(),
            transcoder_report.runtime,
        );
        if let Some(err) = transcoder_report.exit_error() {
            error!(process = transcoder.name, "{}", err);
        }

        // ffmpeg bounds the run; a capture still running is left alone.
        let capture_report = if capture_task.is_finished() {
            match capture_task.await {
                Ok(report) => report,
                Err(e) => {
                    warn!(error = %e, "capture task failed");
                    None
                }
            }
        } else {
            debug!("raspivid still running after ffmpeg exit");
            None
        };

        Ok(PipelineStats {
            capture: capture_report,
            transcoder: transcoder_report,
            duration: start_time.elapsed(),
        })
    }
}

/// Own the capture process and the pipe write end held by `command`.
///
/// Reports the start result through `started`. The write end is released
/// when `command` drops, which happens only after raspivid has exited, or
/// right away if it never started.
async fn run_capture(
    spec: ProcessSpec,
    mut command: Command,
    verbose: bool,
    started: oneshot::Sender<Result<()>>,
) -> Option<ProcessReport> {
    let started_at = Instant::now();
    let mut child = match command.spawn() {
        Ok(child) => child,
        Err(source) => {
            let _ = started.send(Err(LaunchError::process_start(spec.name, source)));
            return None;
        }
    };

    record_process_started(spec.name);
    info!(process = spec.name, "{}", spec.start_message(verbose));
    let _ = started.send(Ok(()));

    let outcome = match child.wait().await {
        Ok(status) => ExitOutcome::Exited(status),
        Err(e) => ExitOutcome::WaitFailed(e.to_string()),
    };
    // closes the write end; ffmpeg reads EOF from here on
    drop(command);

    let report = ProcessReport::new(spec.name, outcome, started_at.elapsed());
    record_process_exited(spec.name, report.success(), report.runtime);
    match report.exit_error() {
        Some(err) => warn!(process = spec.name, "{}", err),
        None => info!(process = spec.name, "raspivid exited"),
    }

    Some(report)
}
