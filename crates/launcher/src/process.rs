//! Child process description: a fixed name, a program path and its arguments.

use std::fmt;
use std::path::PathBuf;

use contracts::{
    Settings, CAPTURE_PROCESS_NAME, FFMPEG_BIN_PATH, RASPIVID_BIN_PATH, TRANSCODER_PROCESS_NAME,
};
use tokio::process::Command;

use crate::args::{capture_args, transcoder_args};

/// One external process invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessSpec {
    /// Name used in log lines and metrics labels
    pub name: &'static str,
    /// Executable path
    pub program: PathBuf,
    /// Arguments in construction order
    pub args: Vec<String>,
}

impl ProcessSpec {
    /// `raspivid` at its fixed path
    pub fn capture(settings: &Settings) -> Self {
        Self {
            name: CAPTURE_PROCESS_NAME,
            program: PathBuf::from(RASPIVID_BIN_PATH),
            args: capture_args(settings),
        }
    }

    /// `ffmpeg` at its fixed path
    pub fn transcoder(settings: &Settings) -> Self {
        Self {
            name: TRANSCODER_PROCESS_NAME,
            program: PathBuf::from(FFMPEG_BIN_PATH),
            args: transcoder_args(settings),
        }
    }

    /// Replace the executable path, keeping name and arguments
    pub fn with_program(mut self, program: impl Into<PathBuf>) -> Self {
        self.program = program.into();
        self
    }

    /// Arguments joined by single spaces
    pub fn joined_args(&self) -> String {
        self.args.join(" ")
    }

    /// Log line emitted once the process has started
    pub fn start_message(&self, verbose: bool) -> String {
        if verbose {
            format!("started {} with args: {}", self.name, self.joined_args())
        } else {
            format!("started {}", self.name)
        }
    }

    /// Unconfigured command; the caller wires the standard streams
    pub(crate) fn command(&self) -> Command {
        let mut command = Command::new(&self.program);
        command.args(&self.args);
        command
    }
}

impl fmt::Display for ProcessSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program.display())?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}
