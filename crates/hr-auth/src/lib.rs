//! Client-side authentication and authorization for the HR console.
//!
//! Holds the signed-in [`Identity`], persists it through a [`SessionStore`],
//! normalizes role claims into the closed [`Role`] set, and decides per
//! navigation whether a view may render ([`guard`]).

pub mod error;
pub mod guard;
pub mod identity;
pub mod role;
pub mod router;
pub mod routes;
pub mod session;
pub mod state;

pub use error::{AuthError, Result};
pub use guard::GuardDecision;
pub use identity::Identity;
pub use role::{ROLE_PREFIX, Role, canonical_role_tag, normalize_role};
pub use router::{Location, Navigator, Resolution, Router};
pub use routes::{Route, RouteAccess, RouteMatch, RouteTable, View};
pub use session::{
    FileStorage, LoadResult, MemoryStorage, SessionError, SessionResult, SessionStorage,
    SessionStore,
};
pub use state::AuthState;

/// Entry point unauthenticated navigation is sent to.
pub const LOGIN_PATH: &str = "/login";
/// Landing view; also the target for role mismatches so a guard never loops.
pub const HOME_PATH: &str = "/";
/// Default destination after a successful login.
pub const DEFAULT_AFTER_LOGIN_PATH: &str = "/view";

#[cfg(test)]
mod tests;
