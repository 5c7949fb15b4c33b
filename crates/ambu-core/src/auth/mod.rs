//! Authentication domain: credential form, sanitizer, token exchange seam.

mod model;
mod sanitizer;
mod service;

pub use model::{CredentialForm, TokenGrant, classify_login_status};
pub use sanitizer::sanitize_username;
pub use service::AuthGateway;
