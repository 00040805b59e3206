//! Outcome of a pipeline run.

use std::process::ExitStatus;
use std::time::Duration;

use tracing::info;

use crate::error::LaunchError;

/// How a started process ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExitOutcome {
    /// Process exited or was killed by a signal
    Exited(ExitStatus),
    /// Waiting on the process failed
    WaitFailed(String),
}

impl ExitOutcome {
    pub fn success(&self) -> bool {
        matches!(self, Self::Exited(status) if status.success())
    }

    /// Exit code, if the process exited normally
    pub fn code(&self) -> Option<i32> {
        match self {
            Self::Exited(status) => status.code(),
            Self::WaitFailed(_) => None,
        }
    }
}

/// Lifecycle summary of one child process
#[derive(Debug, Clone)]
pub struct ProcessReport {
    pub name: &'static str,
    pub outcome: ExitOutcome,
    /// Time from start to observed exit
    pub runtime: Duration,
}

impl ProcessReport {
    pub fn new(name: &'static str, outcome: ExitOutcome, runtime: Duration) -> Self {
        Self {
            name,
            outcome,
            runtime,
        }
    }

    pub fn success(&self) -> bool {
        self.outcome.success()
    }

    /// `ProcessExit` error describing an unsuccessful end, `None` on success
    pub fn exit_error(&self) -> Option<LaunchError> {
        match &self.outcome {
            ExitOutcome::Exited(status) if status.success() => None,
            ExitOutcome::Exited(status) => Some(LaunchError::process_exit(self.name, status.to_string())),
            ExitOutcome::WaitFailed(message) => {
                Some(LaunchError::process_exit(self.name, message.clone()))
            }
        }
    }
}

/// Statistics from a pipeline run
#[derive(Debug, Clone)]
pub struct PipelineStats {
    /// Capture report; `None` while raspivid is still running when ffmpeg exits
    pub capture: Option<ProcessReport>,

    /// Transcoder report
    pub transcoder: ProcessReport,

    /// Total duration of the run
    pub duration: Duration,
}

impl PipelineStats {
    /// Log one line per process plus the total duration
    pub fn log_summary(&self) {
        for report in self.capture.iter().chain(std::iter::once(&self.transcoder)) {
            info!(
                process = report.name,
                success = report.success(),
                code = ?report.outcome.code(),
                runtime_secs = report.runtime.as_secs_f64(),
                "Process finished"
            );
        }
        if self.capture.is_none() {
            info!("raspivid was still running when ffmpeg exited");
        }
        info!(
            duration_secs = self.duration.as_secs_f64(),
            "Pipeline finished"
        );
    }
}
