//! Error types for the AMBU client.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A shared error type for the entire AMBU client.
///
/// The first five variants form the user-facing failure taxonomy. They are
/// terminal at the component that produces them: the Login Flow and the
/// Query Orchestrator turn them into a localized message (see
/// [`crate::messages`]) and never retry on their own.
///
/// The remaining variants cover local plumbing (storage, configuration).
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AmbuError {
    /// The exchange could not complete (connection refused, DNS, timeout).
    #[error("Network failure: {0}")]
    NetworkFailure(String),

    /// The credential exchange was rejected with 401.
    #[error("Invalid credentials")]
    AuthInvalid,

    /// The credential exchange was rejected with 429.
    #[error("Too many login attempts")]
    AuthRateLimited,

    /// Any other login failure (unexpected status, unusable body).
    #[error("Login failed: {0}")]
    AuthGeneric(String),

    /// Any non-success search exchange or unparsable search body.
    #[error("Search failed: {0}")]
    SearchGeneric(String),

    /// A login submission was attempted while another one is pending.
    #[error("A login request is already in progress")]
    LoginInProgress,

    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization { format: String, message: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Token persistence error
    #[error("Storage error: {0}")]
    Storage(String),
}

impl AmbuError {
    /// Creates a NetworkFailure error
    pub fn network(message: impl Into<String>) -> Self {
        Self::NetworkFailure(message.into())
    }

    /// Creates an AuthGeneric error
    pub fn auth_generic(message: impl Into<String>) -> Self {
        Self::AuthGeneric(message.into())
    }

    /// Creates a SearchGeneric error
    pub fn search_generic(message: impl Into<String>) -> Self {
        Self::SearchGeneric(message.into())
    }

    /// Creates an IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates a Storage error
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage(message.into())
    }

    /// True for the authentication members of the taxonomy.
    pub fn is_auth(&self) -> bool {
        matches!(
            self,
            Self::AuthInvalid | Self::AuthRateLimited | Self::AuthGeneric(_)
        )
    }

    /// True when the exchange itself never completed.
    pub fn is_network(&self) -> bool {
        matches!(self, Self::NetworkFailure(_))
    }
}

impl From<std::io::Error> for AmbuError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for AmbuError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for AmbuError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::ser::Error> for AmbuError {
    fn from(err: toml::ser::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

/// A type alias for `Result<T, AmbuError>`.
pub type Result<T> = std::result::Result<T, AmbuError>;
