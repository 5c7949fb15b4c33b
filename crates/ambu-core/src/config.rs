//! Client configuration model.
//!
//! Loading (file + environment overrides) lives in `ambu-infrastructure`;
//! this module only defines the shape and the base-address selection.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use strum::{AsRefStr, Display, EnumString};

use crate::search::Engine;

pub const DEFAULT_LOCAL_URL: &str = "http://localhost:8000";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Deployment the client talks to.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Environment {
    #[default]
    Local,
    Production,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ClientConfig {
    pub environment: Environment,
    pub local_url: String,
    /// Required when `environment = "production"`.
    pub production_url: Option<String>,
    /// Explicit address; wins over the environment selection.
    pub base_url: Option<String>,
    pub default_engine: Engine,
    pub request_timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            environment: Environment::Local,
            local_url: DEFAULT_LOCAL_URL.to_string(),
            production_url: None,
            base_url: None,
            default_engine: Engine::default(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

impl ClientConfig {
    /// Resolves the base address of the remote service, without a trailing slash.
    pub fn resolve_base_url(&self) -> crate::Result<String> {
        let selected = match (&self.base_url, self.environment) {
            (Some(explicit), _) => explicit.as_str(),
            (None, Environment::Local) => self.local_url.as_str(),
            (None, Environment::Production) => {
                self.production_url.as_deref().ok_or_else(|| {
                    crate::AmbuError::config(
                        "environment is 'production' but production_url is not set",
                    )
                })?
            }
        };

        let trimmed = selected.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            return Err(crate::AmbuError::config("base address is empty"));
        }
        Ok(trimmed.to_string())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.max(1))
    }
}
