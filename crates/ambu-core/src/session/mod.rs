//! Session domain module.
//!
//! # Module Structure
//!
//! - `model`: in-memory `Session` and the persisted `SessionRecord`
//! - `repository`: persistence trait for the token
//! - `guard`: `SessionGuard` and the `Route` table

mod guard;
mod model;
mod repository;

pub use guard::{Navigation, Route, SessionGuard};
pub use model::{Session, SessionRecord};
pub use repository::TokenRepository;
