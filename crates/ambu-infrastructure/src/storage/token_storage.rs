//! Token persistence backends.

use ambu_core::session::{SessionRecord, TokenRepository};
use ambu_core::{AmbuError, Result};
use std::path::PathBuf;
use std::sync::Mutex;

use super::atomic_json::{AtomicJsonError, AtomicJsonFile};
use crate::paths::{AmbuPaths, PathError};

impl From<AtomicJsonError> for AmbuError {
    fn from(err: AtomicJsonError) -> Self {
        match err {
            AtomicJsonError::IoError(e) => e.into(),
            AtomicJsonError::JsonError(e) => e.into(),
        }
    }
}

/// Stores the session as `session.json` (`{"token": ..., "saved_at": ...}`).
///
/// The file is written with 0600 permissions on Unix.
pub struct FileTokenRepository {
    file: AtomicJsonFile<SessionRecord>,
}

impl FileTokenRepository {
    pub fn new(paths: &AmbuPaths) -> Self {
        Self::with_path(paths.session_file())
    }

    /// Resolves the default location (see [`AmbuPaths::new`]).
    pub fn from_default_location() -> std::result::Result<Self, PathError> {
        Ok(Self::new(&AmbuPaths::new(None)?))
    }

    pub fn with_path(path: PathBuf) -> Self {
        Self {
            file: AtomicJsonFile::new(path).with_mode(0o600),
        }
    }

    pub fn path(&self) -> &PathBuf {
        self.file.path()
    }
}

impl TokenRepository for FileTokenRepository {
    fn load(&self) -> Result<Option<SessionRecord>> {
        let record = self.file.load()?;
        Ok(record.filter(|r| !r.token.is_empty()))
    }

    fn save(&self, record: &SessionRecord) -> Result<()> {
        self.file.save(record)?;
        tracing::debug!(path = %self.file.path().display(), "Session token persisted");
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        self.file.remove()?;
        tracing::debug!(path = %self.file.path().display(), "Session token removed");
        Ok(())
    }
}

/// Process-lifetime storage; the session disappears on restart.
#[derive(Default)]
pub struct InMemoryTokenRepository {
    record: Mutex<Option<SessionRecord>>,
}

impl InMemoryTokenRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(&self) -> Result<std::sync::MutexGuard<'_, Option<SessionRecord>>> {
        self.record
            .lock()
            .map_err(|_| AmbuError::storage("in-memory token slot poisoned"))
    }
}

impl TokenRepository for InMemoryTokenRepository {
    fn load(&self) -> Result<Option<SessionRecord>> {
        Ok(self.slot()?.clone())
    }

    fn save(&self, record: &SessionRecord) -> Result<()> {
        *self.slot()? = Some(record.clone());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        *self.slot()? = None;
        Ok(())
    }
}
