use ambu_core::AmbuError;
use ambu_core::auth::{AuthGateway, CredentialForm};
use ambu_core::messages;
use ambu_core::session::Navigation;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use thiserror::Error;

use crate::SessionStore;

/// A login attempt that did not produce a session.
///
/// Displays as the localized message; `cause` is for logs and tests only.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct LoginFailure {
    pub cause: AmbuError,
    pub message: &'static str,
}

impl From<AmbuError> for LoginFailure {
    fn from(cause: AmbuError) -> Self {
        let message = messages::login_failure(&cause);
        Self { cause, message }
    }
}

/// Credential exchange use case.
///
/// Writes the session store exactly once on success and never on failure.
/// At most one submission runs at a time; extra attempts are rejected with
/// `LoginInProgress`.
pub struct LoginFlow {
    gateway: Arc<dyn AuthGateway>,
    session: Arc<SessionStore>,
    pending: AtomicBool,
}

impl LoginFlow {
    pub fn new(gateway: Arc<dyn AuthGateway>, session: Arc<SessionStore>) -> Self {
        Self {
            gateway,
            session,
            pending: AtomicBool::new(false),
        }
    }

    /// True while a submission is in flight; the submit control should be disabled.
    pub fn is_pending(&self) -> bool {
        self.pending.load(Ordering::Acquire)
    }

    /// Both fields must be non-empty; callers enforce that before submitting.
    pub async fn submit(&self, username: &str, password: &str) -> Result<Navigation, LoginFailure> {
        let _pending = PendingGuard::acquire(&self.pending).ok_or_else(|| {
            tracing::debug!("Login rejected: another submission is pending");
            LoginFailure::from(AmbuError::LoginInProgress)
        })?;

        let form = CredentialForm::new(username, password);
        let grant = self.gateway.exchange(&form).await.map_err(|err| {
            tracing::warn!(error = %err, username = form.username(), "Login failed");
            LoginFailure::from(err)
        })?;

        let navigation = self.session.establish(grant.access_token).map_err(|err| {
            tracing::error!(error = %err, "Failed to persist session token");
            LoginFailure {
                cause: err,
                message: messages::LOGIN_GENERIC,
            }
        })?;

        tracing::info!(username = form.username(), "Login succeeded");
        Ok(navigation)
    }

    /// Explicit logout.
    pub fn logout(&self) -> ambu_core::Result<Navigation> {
        self.session.clear()
    }
}

/// Resets the pending flag when the submission ends, however it ends.
struct PendingGuard<'a>(&'a AtomicBool);

impl<'a> PendingGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self(flag))
    }
}

impl Drop for PendingGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}
