//! Unified path management for AMBU files.
//!
//! # Directory Structure
//!
//! ```text
//! ~/.config/ambu/              # Config directory ($AMBU_HOME overrides)
//! ├── config.toml              # Client configuration
//! ├── session.json             # Persisted session token (0600)
//! └── logs/                    # Application logs
//!     └── ambu.log.YYYY-MM-DD
//! ```

use std::path::{Path, PathBuf};

pub const HOME_ENV: &str = "AMBU_HOME";
const APP_DIR: &str = "ambu";

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Platform config directory could not be determined.
    ConfigDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::ConfigDirNotFound => write!(f, "Cannot find config directory"),
        }
    }
}

impl std::error::Error for PathError {}

/// Resolves every file location from a single root.
#[derive(Debug, Clone)]
pub struct AmbuPaths {
    root: PathBuf,
}

impl AmbuPaths {
    /// Uses `base` when given, otherwise `$AMBU_HOME`, otherwise the platform
    /// config directory (e.g. `~/.config/ambu`).
    pub fn new(base: Option<&Path>) -> Result<Self, PathError> {
        if let Some(base) = base {
            return Ok(Self {
                root: base.to_path_buf(),
            });
        }

        if let Some(home) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
            return Ok(Self {
                root: PathBuf::from(home),
            });
        }

        let root = dirs::config_dir()
            .ok_or(PathError::ConfigDirNotFound)?
            .join(APP_DIR);
        Ok(Self { root })
    }

    pub fn config_dir(&self) -> &Path {
        &self.root
    }

    pub fn config_file(&self) -> PathBuf {
        self.root.join("config.toml")
    }

    /// Ensure this file stays private: it holds the session token.
    pub fn session_file(&self) -> PathBuf {
        self.root.join("session.json")
    }

    pub fn logs_dir(&self) -> PathBuf {
        self.root.join("logs")
    }
}
