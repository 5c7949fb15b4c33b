//! `POST /token` credential exchange.

use ambu_core::auth::{AuthGateway, CredentialForm, TokenGrant, classify_login_status};
use ambu_core::{AmbuError, Result};
use async_trait::async_trait;

use crate::Endpoint;

const TOKEN_PATH: &str = "token";

#[derive(Clone, Debug)]
pub struct HttpAuthGateway {
    endpoint: Endpoint,
}

impl HttpAuthGateway {
    pub fn new(endpoint: Endpoint) -> Self {
        Self { endpoint }
    }
}

#[async_trait]
impl AuthGateway for HttpAuthGateway {
    async fn exchange(&self, form: &CredentialForm) -> Result<TokenGrant> {
        let url = self.endpoint.url(TOKEN_PATH);
        tracing::debug!(%url, username = form.username(), "Submitting credentials");

        let response = self
            .endpoint
            .client()
            .post(&url)
            .form(&[("username", form.username()), ("password", form.password())])
            .send()
            .await
            .map_err(|err| {
                tracing::warn!(error = %err, "Token request failed");
                AmbuError::network(format!("token request failed: {err}"))
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "Token request rejected");
            return Err(classify_login_status(status.as_u16()));
        }

        let grant: TokenGrant = response.json().await.map_err(|err| {
            tracing::warn!(error = %err, "Token response unreadable");
            AmbuError::auth_generic(format!("invalid token response: {err}"))
        })?;

        if grant.access_token.trim().is_empty() {
            return Err(AmbuError::auth_generic("empty access_token"));
        }

        Ok(grant)
    }
}
