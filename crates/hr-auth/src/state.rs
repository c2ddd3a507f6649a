use crate::{Identity, Role};

/// What the auth gate publishes to the rest of the client.
///
/// `Bootstrapping` only exists until the persisted session has been read;
/// dependents suspend instead of rendering an unauthenticated view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthState {
    Bootstrapping,
    Authenticated(Identity),
    Unauthenticated,
}

impl AuthState {
    pub fn identity(&self) -> Option<&Identity> {
        match self {
            AuthState::Authenticated(identity) => Some(identity),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, AuthState::Bootstrapping)
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, AuthState::Authenticated(_))
    }

    /// True iff an identity is present and its role is in `allowed`.
    /// An empty set never matches.
    pub fn has_role(&self, allowed: &[Role]) -> bool {
        self.identity()
            .is_some_and(|identity| identity.has_any_role(allowed))
    }

    pub fn name(&self) -> &'static str {
        match self {
            AuthState::Bootstrapping => "bootstrapping",
            AuthState::Authenticated(_) => "authenticated",
            AuthState::Unauthenticated => "unauthenticated",
        }
    }
}

impl From<Option<Identity>> for AuthState {
    fn from(identity: Option<Identity>) -> Self {
        match identity {
            Some(identity) => AuthState::Authenticated(identity),
            None => AuthState::Unauthenticated,
        }
    }
}
