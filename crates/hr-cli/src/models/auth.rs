use hr_auth::{AuthError, Identity, Role, normalize_role};

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// Payload of a successful `POST /auth/login`.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub id: Value,
    #[serde(default)]
    pub email: Option<String>,
    pub token: String,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

impl LoginResponse {
    /// Builds the session identity, normalizing the role claim.
    ///
    /// `fallback_email` is used when the backend omits the email.
    pub fn into_identity(self, fallback_email: &str) -> Result<Identity, AuthError> {
        let id = match self.id {
            Value::String(id) => id,
            Value::Null => String::new(),
            other => other.to_string(),
        };
        let role = normalize_role(self.role.as_deref().unwrap_or_default())?;
        let email = self.email.unwrap_or_else(|| fallback_email.to_string());
        let display_name = self.username.unwrap_or_else(|| email.clone());

        Identity::new(id, email, display_name, self.token, role)
    }
}

/// Registration form for `POST /auth/signup`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignupRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

impl SignupRequest {
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
            password: password.into(),
            role: Role::User,
        }
    }

    pub fn with_role(mut self, role: Role) -> Self {
        self.role = role;
        self
    }
}
