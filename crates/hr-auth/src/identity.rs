use crate::{AuthError, Result as AuthErrorResult, Role, normalize_role};

use std::fmt;

use serde::{Deserialize, Serialize};

/// The signed-in principal.
///
/// Either fully populated or absent: construction fails when the id or
/// token is blank, and the role is always canonical.
#[derive(Clone, PartialEq, Eq)]
pub struct Identity {
    pub id: String,
    pub email: String,
    pub display_name: String,
    pub token: String,
    pub role: Role,
}

impl Identity {
    #[track_caller]
    pub fn new(
        id: impl Into<String>,
        email: impl Into<String>,
        display_name: impl Into<String>,
        token: impl Into<String>,
        role: Role,
    ) -> AuthErrorResult<Self> {
        let id = id.into();
        let token = token.into();

        if id.trim().is_empty() {
            return Err(AuthError::missing_field("id"));
        }
        if token.trim().is_empty() {
            return Err(AuthError::missing_field("token"));
        }

        Ok(Self {
            id,
            email: email.into(),
            display_name: display_name.into(),
            token,
            role,
        })
    }

    pub fn has_any_role(&self, allowed: &[Role]) -> bool {
        allowed.contains(&self.role)
    }

    /// Value for the `Authorization` header.
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.token)
    }
}

// Token stays out of logs.
impl fmt::Debug for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Identity")
            .field("id", &self.id)
            .field("email", &self.email)
            .field("display_name", &self.display_name)
            .field("token", &"<redacted>")
            .field("role", &self.role)
            .finish()
    }
}

/// Backend ids arrive as JSON numbers; older records hold strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub(crate) enum RawId {
    Number(i64),
    Text(String),
}

impl RawId {
    fn into_string(self) -> String {
        match self {
            RawId::Number(n) => n.to_string(),
            RawId::Text(s) => s,
        }
    }
}

/// On-disk shape of the session record.
///
/// Every field is optional so that a partial record parses and can be
/// rejected with a precise reason instead of a serde error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub(crate) struct PersistedIdentity {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RawId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

impl PersistedIdentity {
    /// Validate and convert into a live identity. A missing role defaults
    /// to `ROLE_USER`; an unrecognized one is rejected.
    #[track_caller]
    pub fn into_identity(self) -> AuthErrorResult<Identity> {
        let id = self
            .id
            .map(RawId::into_string)
            .ok_or_else(|| AuthError::missing_field("id"))?;
        let token = self.token.ok_or_else(|| AuthError::missing_field("token"))?;
        let role = normalize_role(self.role.as_deref().unwrap_or_default())?;

        Identity::new(
            id,
            self.email.unwrap_or_default(),
            self.name.unwrap_or_default(),
            token,
            role,
        )
    }
}

impl From<&Identity> for PersistedIdentity {
    fn from(identity: &Identity) -> Self {
        Self {
            id: Some(RawId::Text(identity.id.clone())),
            email: Some(identity.email.clone()),
            name: Some(identity.display_name.clone()),
            token: Some(identity.token.clone()),
            role: Some(identity.role.as_str().to_string()),
        }
    }
}
