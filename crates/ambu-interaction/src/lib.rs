//! HTTP transports for the remote lookup service.
//!
//! Both gateways share one `reqwest::Client` and a base address resolved from
//! `ClientConfig`; neither retries.

pub mod auth_client;
pub mod lookup_client;

use ambu_core::config::ClientConfig;
use ambu_core::{AmbuError, Result};
use reqwest::Client;

pub use auth_client::HttpAuthGateway;
pub use lookup_client::HttpLookupGateway;

const USER_AGENT: &str = concat!("ambu/", env!("CARGO_PKG_VERSION"));

/// Connection settings shared by the gateways.
#[derive(Clone, Debug)]
pub struct Endpoint {
    client: Client,
    base_url: String,
}

impl Endpoint {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Builds a client bounded by the configured request timeout.
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        let base_url = config.resolve_base_url()?;
        let client = Client::builder()
            .timeout(config.request_timeout())
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| AmbuError::config(format!("Failed to build HTTP client: {e}")))?;
        Ok(Self::new(client, base_url))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn client(&self) -> &Client {
        &self.client
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}
