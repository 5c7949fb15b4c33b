//! Credential exchange models.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::AmbuError;

use super::sanitizer::sanitize_username;

/// Form body for `POST /token`.
///
/// Only constructible through [`CredentialForm::new`], which applies the
/// username sanitizer.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct CredentialForm {
    username: String,
    password: String,
}

impl CredentialForm {
    pub fn new(raw_username: &str, password: impl Into<String>) -> Self {
        Self {
            username: sanitize_username(raw_username),
            password: password.into(),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

impl fmt::Debug for CredentialForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialForm")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Successful `/token` body.
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct TokenGrant {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
}

impl fmt::Debug for TokenGrant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenGrant")
            .field("access_token", &"<redacted>")
            .field("token_type", &self.token_type)
            .finish()
    }
}

/// Maps a non-success `/token` status to its taxonomy member.
pub fn classify_login_status(status: u16) -> AmbuError {
    match status {
        401 => AmbuError::AuthInvalid,
        429 => AmbuError::AuthRateLimited,
        other => AmbuError::auth_generic(format!("unexpected status {other}")),
    }
}
