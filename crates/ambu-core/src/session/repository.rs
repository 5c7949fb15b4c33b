use crate::error::Result;
use crate::session::SessionRecord;

/// Persistence for the session token.
///
/// Synchronous on purpose: the store must finish a write before the guard
/// re-evaluates, without an await point in between.
pub trait TokenRepository: Send + Sync {
    /// Returns the stored record, or `None` when nothing is persisted.
    fn load(&self) -> Result<Option<SessionRecord>>;

    /// Replaces the stored record.
    fn save(&self, record: &SessionRecord) -> Result<()>;

    /// Removes the stored record. Clearing an empty store is not an error.
    fn clear(&self) -> Result<()>;
}
