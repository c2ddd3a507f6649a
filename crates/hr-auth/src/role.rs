use crate::{AuthError, Result as AuthErrorResult};

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Prefix every canonical role tag carries.
pub const ROLE_PREFIX: &str = "ROLE_";

/// Closed set of console roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Role {
    Admin,
    Hr,
    User,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Admin, Role::Hr, Role::User];

    /// Canonical tag, e.g. `ROLE_HR`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "ROLE_ADMIN",
            Role::Hr => "ROLE_HR",
            Role::User => "ROLE_USER",
        }
    }

    /// Human-readable label shown next to the signed-in user.
    pub fn label(&self) -> &'static str {
        match self {
            Role::Admin => "System Administrator",
            Role::Hr => "HR Specialist",
            Role::User => "Standard Personnel",
        }
    }

    fn from_canonical(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|role| role.as_str() == tag)
    }
}

/// Upper-cases a raw role claim and adds [`ROLE_PREFIX`] when absent.
///
/// A blank claim maps to `ROLE_USER`, matching what the backend assigns
/// when a registration omits the role.
pub fn canonical_role_tag(raw: &str) -> String {
    let upper = raw.trim().to_uppercase();
    if upper.is_empty() {
        return Role::User.as_str().to_string();
    }

    if upper.starts_with(ROLE_PREFIX) {
        upper
    } else {
        format!("{ROLE_PREFIX}{upper}")
    }
}

/// The single normalization point for every role that enters the client.
#[track_caller]
pub fn normalize_role(raw: &str) -> AuthErrorResult<Role> {
    let tag = canonical_role_tag(raw);
    Role::from_canonical(&tag).ok_or_else(|| AuthError::unknown_role(tag))
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = AuthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        normalize_role(s)
    }
}

impl Serialize for Role {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Role {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        normalize_role(&raw).map_err(serde::de::Error::custom)
    }
}
