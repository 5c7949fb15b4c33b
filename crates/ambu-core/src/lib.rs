//! Domain layer for AMBU.
//!
//! Contains the session model and guard, the authentication and lookup
//! seams, result classification and the view-level disclosure state. No I/O
//! happens here; transports and storage are injected through the traits in
//! [`auth`], [`search`] and [`session`].

pub mod auth;
pub mod config;
pub mod disclosure;
pub mod error;
pub mod messages;
pub mod search;
pub mod session;

// Re-export common error type
pub use error::{AmbuError, Result};
