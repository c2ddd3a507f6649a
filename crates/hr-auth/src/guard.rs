//! Per-navigation authorization check.

use crate::{AuthState, RouteAccess};

use log::{debug, warn};

/// Outcome of guarding one navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    /// Show the requested view unchanged.
    Render,
    /// The session is still being restored; render nothing yet.
    Suspend,
    /// No identity: go to login, remembering where the user was headed.
    RedirectToLogin { from: String },
    /// Signed in but the role is not allowed: go home, never to another
    /// protected view.
    RedirectHome,
}

impl GuardDecision {
    pub fn is_render(&self) -> bool {
        matches!(self, GuardDecision::Render)
    }
}

/// Pure function of the current auth state and a route's declared access.
pub fn evaluate(state: &AuthState, access: &RouteAccess, requested: &str) -> GuardDecision {
    if state.is_loading() {
        return GuardDecision::Suspend;
    }

    let allowed = match access {
        RouteAccess::Public => return GuardDecision::Render,
        RouteAccess::Protected(allowed) => allowed,
    };

    let Some(identity) = state.identity() else {
        warn!("No identity for {requested}, redirecting to login");
        return GuardDecision::RedirectToLogin {
            from: requested.to_string(),
        };
    };

    if !allowed.is_empty() && !identity.has_any_role(allowed) {
        warn!(
            "Role mismatch for {requested}: required {:?}, user has {}",
            allowed, identity.role
        );
        return GuardDecision::RedirectHome;
    }

    debug!("Guard passed for {requested} as {}", identity.role);
    GuardDecision::Render
}
