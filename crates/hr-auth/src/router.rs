use crate::{AuthState, GuardDecision, HOME_PATH, LOGIN_PATH, RouteTable, View, guard};

use std::collections::BTreeMap;
use std::sync::{Mutex, PoisonError};

use log::info;

/// Where the client currently is, plus the location a login redirect
/// interrupted (best-effort return target).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub path: String,
    pub from: Option<String>,
}

impl Location {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            from: None,
        }
    }
}

/// Navigation side channel used by the HTTP client to force a re-login.
pub trait Navigator: Send + Sync {
    fn current_path(&self) -> String;

    /// Replace the current location without evaluating any guard.
    fn replace(&self, path: &str);
}

/// The view a navigation ended on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub view: View,
    pub location: Location,
    pub params: BTreeMap<String, String>,
    /// Guard decision for the originally requested path.
    pub decision: GuardDecision,
}

impl Resolution {
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }
}

/// In-memory router: tracks the current location and applies the guard on
/// every navigation.
pub struct Router {
    table: RouteTable,
    location: Mutex<Location>,
}

impl Router {
    pub fn new(table: RouteTable) -> Self {
        Self {
            table,
            location: Mutex::new(Location::new(HOME_PATH)),
        }
    }

    pub fn location(&self) -> Location {
        self.location
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Navigate to `path`, following at most one guard redirect.
    ///
    /// Redirect targets (`/login`, `/`) are public, so resolution always
    /// terminates.
    pub fn navigate(&self, path: &str, state: &AuthState) -> Resolution {
        let requested = self.table.resolve(path);
        let decision = guard::evaluate(state, &requested.route.access, path);

        let (location, resolved) = match &decision {
            GuardDecision::Render | GuardDecision::Suspend => (Location::new(path), requested),
            GuardDecision::RedirectToLogin { from } => {
                info!("Redirecting {path} to {LOGIN_PATH}");
                (
                    Location {
                        path: LOGIN_PATH.to_string(),
                        from: Some(from.clone()),
                    },
                    self.table.resolve(LOGIN_PATH),
                )
            }
            GuardDecision::RedirectHome => {
                info!("Redirecting {path} to {HOME_PATH}");
                (Location::new(HOME_PATH), self.table.resolve(HOME_PATH))
            }
        };

        let resolution = Resolution {
            view: resolved.route.view,
            location: location.clone(),
            params: resolved.params,
            decision,
        };

        *self.location.lock().unwrap_or_else(PoisonError::into_inner) = location;
        resolution
    }

    /// Re-evaluate the current location, e.g. after the identity changed.
    pub fn refresh(&self, state: &AuthState) -> Resolution {
        let current = self.location();
        let resolution = self.navigate(&current.path, state);

        // Keep the remembered return target when staying on the login page
        if resolution.location.path == current.path && current.from.is_some() {
            let mut location = self.location.lock().unwrap_or_else(PoisonError::into_inner);
            location.from = current.from;
        }

        resolution
    }

    /// Where to go after logging in: the interrupted location if one was
    /// remembered, otherwise `fallback`.
    pub fn return_path(&self, fallback: &str) -> String {
        self.location().from.unwrap_or_else(|| fallback.to_string())
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new(RouteTable::console())
    }
}

impl Navigator for Router {
    fn current_path(&self) -> String {
        self.location().path
    }

    fn replace(&self, path: &str) {
        let mut location = self.location.lock().unwrap_or_else(PoisonError::into_inner);
        *location = Location::new(path);
    }
}
