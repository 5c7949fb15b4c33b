use async_trait::async_trait;

use crate::auth::{CredentialForm, TokenGrant};
use crate::error::Result;

/// Transport to the session-issuing endpoint.
///
/// Failures must already be classified: `NetworkFailure` when the exchange
/// never completed, otherwise the result of
/// [`classify_login_status`](crate::auth::classify_login_status), or
/// `AuthGeneric` for a success status with an unusable body.
#[async_trait]
pub trait AuthGateway: Send + Sync {
    async fn exchange(&self, form: &CredentialForm) -> Result<TokenGrant>;
}
