//! Session guard and route table.

use serde::{Deserialize, Serialize};

use super::Session;

/// Surfaces of the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Route {
    /// Credential entry; always reachable.
    Login,
    /// Query surface; requires a session token.
    Search,
}

impl Route {
    pub fn path(self) -> &'static str {
        match self {
            Route::Login => "/login",
            Route::Search => "/",
        }
    }

    /// Resolves a requested path. Unknown paths fall back to the home route.
    pub fn resolve(path: &str) -> Route {
        match path.trim_end_matches('/') {
            "/login" => Route::Login,
            _ => Route::Search,
        }
    }

    pub fn is_protected(self) -> bool {
        matches!(self, Route::Search)
    }
}

/// Outcome of a navigation attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Render(Route),
    Redirect(Route),
}

impl Navigation {
    /// The route that ends up on screen.
    pub fn destination(self) -> Route {
        match self {
            Navigation::Render(route) | Navigation::Redirect(route) => route,
        }
    }

    pub fn is_admitted(self, route: Route) -> bool {
        self == Navigation::Render(route)
    }
}

/// Stateless gate in front of protected routes.
///
/// Holds no memory of earlier decisions; every call reads the session it is
/// given.
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionGuard;

impl SessionGuard {
    pub fn evaluate(&self, session: &Session, requested: Route) -> Navigation {
        if requested.is_protected() && !session.is_authenticated() {
            Navigation::Redirect(Route::Login)
        } else {
            Navigation::Render(requested)
        }
    }

    pub fn evaluate_path(&self, session: &Session, path: &str) -> Navigation {
        self.evaluate(session, Route::resolve(path))
    }
}
