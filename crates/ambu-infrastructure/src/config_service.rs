//! Configuration service implementation.
//!
//! Loads `ClientConfig` from `config.toml` and layers environment overrides
//! on top:
//!
//! | Variable            | Field                  |
//! |---------------------|------------------------|
//! | `AMBU_ENV`          | `environment`          |
//! | `AMBU_BASE_URL`     | `base_url`             |
//! | `AMBU_ENGINE`       | `default_engine`       |
//! | `AMBU_TIMEOUT_SECS` | `request_timeout_secs` |

use ambu_core::config::ClientConfig;
use ambu_core::{AmbuError, Result};
use std::fs;
use std::path::PathBuf;
use std::sync::{Arc, RwLock};

use crate::paths::AmbuPaths;

pub const ENV_ENVIRONMENT: &str = "AMBU_ENV";
pub const ENV_BASE_URL: &str = "AMBU_BASE_URL";
pub const ENV_ENGINE: &str = "AMBU_ENGINE";
pub const ENV_TIMEOUT_SECS: &str = "AMBU_TIMEOUT_SECS";

/// Loads and caches the client configuration.
#[derive(Debug, Clone)]
pub struct ConfigService {
    path: PathBuf,
    /// Cached configuration loaded from file.
    config: Arc<RwLock<Option<ClientConfig>>>,
}

impl ConfigService {
    pub fn new(paths: &AmbuPaths) -> Self {
        Self::with_path(paths.config_file())
    }

    pub fn with_path(path: PathBuf) -> Self {
        Self {
            path,
            config: Arc::new(RwLock::new(None)),
        }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Returns the effective configuration (file, then process environment).
    pub fn get_config(&self) -> Result<ClientConfig> {
        {
            let read_lock = self
                .config
                .read()
                .map_err(|_| AmbuError::config("config cache poisoned"))?;
            if let Some(ref cached) = *read_lock {
                return Ok(cached.clone());
            }
        }

        let mut loaded = self.load_file()?;
        apply_overrides(&mut loaded, |key| std::env::var(key).ok())?;

        let mut write_lock = self
            .config
            .write()
            .map_err(|_| AmbuError::config("config cache poisoned"))?;
        *write_lock = Some(loaded.clone());

        Ok(loaded)
    }

    /// Forces a reload on next access.
    pub fn invalidate_cache(&self) {
        if let Ok(mut write_lock) = self.config.write() {
            *write_lock = None;
        }
    }

    /// Reads the file only. A missing file yields the defaults.
    pub fn load_file(&self) -> Result<ClientConfig> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "No config file, using defaults");
            return Ok(ClientConfig::default());
        }

        let content = fs::read_to_string(&self.path)?;
        let config: ClientConfig = toml::from_str(&content)?;
        tracing::debug!(path = %self.path.display(), "Loaded config file");
        Ok(config)
    }
}

/// Applies environment overrides through `lookup`, ignoring empty values.
pub fn apply_overrides<F>(config: &mut ClientConfig, lookup: F) -> Result<()>
where
    F: Fn(&str) -> Option<String>,
{
    let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    if let Some(value) = get(ENV_ENVIRONMENT) {
        config.environment = value
            .trim()
            .parse()
            .map_err(|_| AmbuError::config(format!("{ENV_ENVIRONMENT}: unknown environment '{value}'")))?;
    }
    if let Some(value) = get(ENV_BASE_URL) {
        config.base_url = Some(value.trim().to_string());
    }
    if let Some(value) = get(ENV_ENGINE) {
        config.default_engine = value
            .trim()
            .parse()
            .map_err(|_| AmbuError::config(format!("{ENV_ENGINE}: unknown engine '{value}'")))?;
    }
    if let Some(value) = get(ENV_TIMEOUT_SECS) {
        config.request_timeout_secs = value
            .trim()
            .parse()
            .map_err(|_| AmbuError::config(format!("{ENV_TIMEOUT_SECS}: not a number '{value}'")))?;
    }

    Ok(())
}
