//! `GET /search` lookup exchange.

use ambu_core::search::{LookupGateway, SearchPayload, SearchRequest};
use ambu_core::{AmbuError, Result};
use async_trait::async_trait;

use crate::Endpoint;

const SEARCH_PATH: &str = "search";

#[derive(Clone, Debug)]
pub struct HttpLookupGateway {
    endpoint: Endpoint,
}

impl HttpLookupGateway {
    pub fn new(endpoint: Endpoint) -> Self {
        Self { endpoint }
    }
}

#[async_trait]
impl LookupGateway for HttpLookupGateway {
    async fn lookup(&self, request: &SearchRequest) -> Result<SearchPayload> {
        let url = self.endpoint.url(SEARCH_PATH);
        tracing::debug!(%url, query = request.query(), engine = %request.engine, "Issuing lookup");

        let response = self
            .endpoint
            .client()
            .get(&url)
            .query(&[("query", request.query()), ("engine", request.engine.as_ref())])
            .send()
            .await
            .map_err(|err| AmbuError::network(format!("search request failed: {err}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AmbuError::search_generic(format!(
                "unexpected status {}",
                status.as_u16()
            )));
        }

        // Read the body first so a transport error mid-body stays a network failure.
        let body = response
            .bytes()
            .await
            .map_err(|err| AmbuError::network(format!("search body read failed: {err}")))?;

        serde_json::from_slice::<SearchPayload>(&body)
            .map_err(|err| AmbuError::search_generic(format!("invalid search response: {err}")))
    }
}
