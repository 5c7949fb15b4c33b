use std::sync::Arc;

use anyhow::Result;
use ambu_application::{LoginFlow, QueryOrchestrator, SessionStore};
use ambu_core::config::ClientConfig;
use ambu_infrastructure::{AmbuPaths, ConfigService, FileTokenRepository};
use ambu_interaction::{Endpoint, HttpAuthGateway, HttpLookupGateway};

/// Local state for one process: config and the persisted session.
///
/// Nothing here touches the service address, so `logout` and `status` keep
/// working when it is misconfigured.
pub struct App {
    pub paths: AmbuPaths,
    pub config: ClientConfig,
    pub session: Arc<SessionStore>,
}

/// Use cases that talk to the remote service.
pub struct Online {
    pub endpoint: Endpoint,
    pub login: LoginFlow,
    pub search: Arc<QueryOrchestrator>,
}

impl App {
    pub fn bootstrap(paths: AmbuPaths, base_url: Option<String>) -> Result<Self> {
        let mut config = ConfigService::new(&paths).get_config()?;
        if let Some(base_url) = base_url {
            config.base_url = Some(base_url);
        }

        let repository = Arc::new(FileTokenRepository::new(&paths));
        let session = Arc::new(SessionStore::restore(repository)?);

        Ok(Self {
            paths,
            config,
            session,
        })
    }

    /// Builds the HTTP gateways; fails when no usable address is configured.
    pub fn connect(&self) -> Result<Online> {
        let endpoint = Endpoint::from_config(&self.config)?;
        tracing::debug!(base_url = endpoint.base_url(), "Using remote service");

        let login = LoginFlow::new(
            Arc::new(HttpAuthGateway::new(endpoint.clone())),
            self.session.clone(),
        );
        let search = Arc::new(QueryOrchestrator::new(
            Arc::new(HttpLookupGateway::new(endpoint.clone())),
            self.config.default_engine,
            self.config.request_timeout(),
        ));

        Ok(Online {
            endpoint,
            login,
            search,
        })
    }
}
