pub mod login;
pub mod logout;
pub mod repl;
pub mod search;
pub mod status;

use anyhow::{Result, bail};
use ambu_core::messages;
use ambu_core::session::{Route, Session, SessionGuard};
use tokio::sync::watch;

use crate::app::App;

/// Fails unless the guard admits the search surface.
pub(crate) fn require_session(app: &App) -> Result<()> {
    if !app.session.navigate(Route::Search).is_admitted(Route::Search) {
        bail!(messages::SESSION_REQUIRED);
    }
    Ok(())
}

/// Guard decision for the latest session seen on a subscription.
pub(crate) fn session_admits(session: &watch::Receiver<Session>) -> bool {
    SessionGuard
        .evaluate(&session.borrow(), Route::Search)
        .is_admitted(Route::Search)
}
