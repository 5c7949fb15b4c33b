//! Storage layer for atomic file operations and token persistence.

mod atomic_json;
mod token_storage;

pub use atomic_json::{AtomicJsonError, AtomicJsonFile};
pub use token_storage::{FileTokenRepository, InMemoryTokenRepository};
