use ambu_core::Result;
use ambu_core::session::{Navigation, Route, Session, SessionGuard, SessionRecord, TokenRepository};
use chrono::{DateTime, Utc};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tokio::sync::watch;

/// Owner of the session token.
///
/// Only [`LoginFlow`](crate::LoginFlow) (via [`establish`](Self::establish))
/// and an explicit logout (via [`clear`](Self::clear)) mutate it. Every
/// mutation is persisted before it becomes visible, and subscribers are
/// notified through a watch channel so the guard can re-evaluate.
pub struct SessionStore {
    repository: Arc<dyn TokenRepository>,
    record: RwLock<Option<SessionRecord>>,
    changes: watch::Sender<Session>,
    guard: SessionGuard,
}

impl SessionStore {
    /// Starts anonymous, ignoring anything persisted.
    pub fn new(repository: Arc<dyn TokenRepository>) -> Self {
        Self::with_record(repository, None)
    }

    /// Starts from the persisted record, if any.
    pub fn restore(repository: Arc<dyn TokenRepository>) -> Result<Self> {
        let record = repository.load()?;
        if record.is_some() {
            tracing::info!("Restored persisted session");
        }
        Ok(Self::with_record(repository, record))
    }

    fn with_record(repository: Arc<dyn TokenRepository>, record: Option<SessionRecord>) -> Self {
        let session = record.as_ref().map(Session::from).unwrap_or_default();
        let (changes, _) = watch::channel(session);
        Self {
            repository,
            record: RwLock::new(record),
            changes,
            guard: SessionGuard,
        }
    }

    pub fn current(&self) -> Session {
        self.read_record()
            .as_ref()
            .map(Session::from)
            .unwrap_or_default()
    }

    pub fn is_authenticated(&self) -> bool {
        self.read_record().is_some()
    }

    pub fn saved_at(&self) -> Option<DateTime<Utc>> {
        self.read_record().as_ref().and_then(|r| r.saved_at)
    }

    /// Receives the new session after every write or clear.
    pub fn subscribe(&self) -> watch::Receiver<Session> {
        self.changes.subscribe()
    }

    /// Evaluates the guard against the current session.
    pub fn navigate(&self, requested: Route) -> Navigation {
        self.guard.evaluate(&self.current(), requested)
    }

    pub fn navigate_path(&self, path: &str) -> Navigation {
        self.guard.evaluate_path(&self.current(), path)
    }

    /// Stores `token` and returns the guard decision for the search surface.
    ///
    /// The write lock is held until the decision is taken, so no reader can
    /// observe the token without the corresponding navigation.
    pub fn establish(&self, token: impl Into<String>) -> Result<Navigation> {
        let record = SessionRecord::new(token);
        let mut slot = self.write_record();
        self.repository.save(&record)?;

        let session = Session::from(&record);
        *slot = Some(record);
        let navigation = self.guard.evaluate(&session, Route::Search);
        drop(slot);

        self.changes.send_replace(session);
        tracing::info!("Session established");
        Ok(navigation)
    }

    /// Logs out. Returns the guard decision for the search surface, which is
    /// always a redirect to login.
    pub fn clear(&self) -> Result<Navigation> {
        let mut slot = self.write_record();
        self.repository.clear()?;
        *slot = None;
        drop(slot);

        let session = Session::anonymous();
        self.changes.send_replace(session.clone());
        tracing::info!("Session cleared");
        Ok(self.guard.evaluate(&session, Route::Search))
    }

    fn read_record(&self) -> RwLockReadGuard<'_, Option<SessionRecord>> {
        self.record.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write_record(&self) -> RwLockWriteGuard<'_, Option<SessionRecord>> {
        self.record.write().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
