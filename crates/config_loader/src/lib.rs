//! # Config Loader
//!
//! Configuration loading module.
//!
//! Responsibilities:
//! - Locate `config.json` next to the running executable
//! - Parse it into `Settings`
//! - Collect non-fatal warnings about suspicious values
//!
//! # Example
//!
//! ```no_run
//! use config_loader::ConfigLoader;
//!
//! let settings = ConfigLoader::load().unwrap();
//! println!("Resolution: {}x{}", settings.video_width, settings.video_height);
//! ```

mod parser;
pub mod validator;

pub use contracts::Settings;

use contracts::{ContractError, CONFIG_FILENAME};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Configuration loader
///
/// Provides static methods to load configuration from files or strings.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load `config.json` from the directory containing the running executable
    ///
    /// # Errors
    /// - Executable location cannot be resolved
    /// - File missing or unreadable
    /// - Parse failure
    pub fn load() -> Result<Settings, ContractError> {
        let path = Self::config_path()?;
        Self::load_from_path(&path)
    }

    /// Path that [`ConfigLoader::load`] reads
    pub fn config_path() -> Result<PathBuf, ContractError> {
        let exe = std::env::current_exe()
            .map_err(|source| ContractError::ExecutablePath { source })?;
        let dir = exe.parent().ok_or_else(|| ContractError::ExecutablePath {
            source: std::io::Error::new(
                ErrorKind::NotFound,
                format!("{} has no parent directory", exe.display()),
            ),
        })?;
        Ok(Self::config_path_in(dir))
    }

    /// Path of the configuration file inside `dir`
    pub fn config_path_in(dir: &Path) -> PathBuf {
        dir.join(CONFIG_FILENAME)
    }

    /// Load configuration from file path
    ///
    /// # Errors
    /// - File missing or unreadable
    /// - Parse failure
    pub fn load_from_path(path: &Path) -> Result<Settings, ContractError> {
        let content = Self::read_file(path)?;
        Self::load_from_str(&content)
    }

    /// Load configuration from string
    pub fn load_from_str(content: &str) -> Result<Settings, ContractError> {
        parser::parse_json(content)
    }

    /// Serialize Settings to JSON string
    pub fn to_json(settings: &Settings) -> Result<String, ContractError> {
        serde_json::to_string_pretty(settings)
            .map_err(|e| ContractError::config_parse(format!("JSON serialize error: {e}")))
    }
}

impl ConfigLoader {
    /// Read configuration file content
    fn read_file(path: &Path) -> Result<String, ContractError> {
        std::fs::read_to_string(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => ContractError::config_not_found(path.display().to_string()),
            _ => ContractError::Io(e),
        })
    }
}
