use hr_auth::{AuthError, SessionError};

use std::panic::Location;

use error_location::ErrorLocation;
use reqwest::StatusCode;
use thiserror::Error;

const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid email or password";
const PENDING_APPROVAL_MESSAGE: &str = "Your account is pending admin approval.";

/// Errors that can occur during API calls.
///
/// Transport failures, non-2xx statuses and `success: false` envelopes all
/// surface through this one type.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP request error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    #[error("API error: {message} (status: {status}, code: {code}) {location}")]
    Api {
        status: StatusCode,
        code: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Unauthorized: {message} {location}")]
    Unauthorized {
        code: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("JSON parse error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
        #[source]
        source: serde_json::Error,
    },

    #[error("Session storage error: {source}")]
    Session {
        #[source]
        source: SessionError,
    },

    #[error("Authorization data error: {source}")]
    Auth {
        #[source]
        source: AuthError,
    },
}

/// How a failed login should be presented.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginFailure {
    InvalidCredentials,
    PendingApproval(String),
    Other(String),
}

impl LoginFailure {
    pub fn message(&self) -> &str {
        match self {
            LoginFailure::InvalidCredentials => INVALID_CREDENTIALS_MESSAGE,
            LoginFailure::PendingApproval(message) | LoginFailure::Other(message) => {
                message.as_str()
            }
        }
    }
}

impl ClientError {
    /// Convert reqwest error with context
    #[track_caller]
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        ClientError::Http {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    /// Convert JSON error with context
    #[track_caller]
    pub fn from_json(err: serde_json::Error) -> Self {
        ClientError::Json {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    /// Create an API error with location
    #[track_caller]
    pub fn api_error(status: StatusCode, code: String, message: String) -> Self {
        ClientError::Api {
            status,
            code,
            message,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn unauthorized(code: String, message: String) -> Self {
        ClientError::Unauthorized {
            code,
            message,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// HTTP status the failure carried, if it got that far.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ClientError::Http { source, .. } => source.status(),
            ClientError::Api { status, .. } => Some(*status),
            ClientError::Unauthorized { .. } => Some(StatusCode::UNAUTHORIZED),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ClientError::Unauthorized { .. })
    }

    /// Backend error code (`AUTH_ERROR`, `NOT_FOUND`, ...) when one was sent,
    /// or the local code of a rejected identity.
    pub fn code(&self) -> Option<&str> {
        match self {
            ClientError::Api { code, .. } | ClientError::Unauthorized { code, .. } => {
                Some(code.as_str())
            }
            ClientError::Auth { source } => Some(source.error_code()),
            _ => None,
        }
    }

    /// The message to show a person, without locations or sources.
    pub fn user_message(&self) -> String {
        match self {
            ClientError::Api { message, .. } | ClientError::Unauthorized { message, .. } => {
                message.clone()
            }
            ClientError::Http { message, .. } | ClientError::Json { message, .. } => {
                message.clone()
            }
            ClientError::Session { source } => source.recovery_hint().to_string(),
            ClientError::Auth { source } => source.to_string(),
        }
    }

    /// Classify a failed login from its payload.
    pub fn login_failure(&self) -> LoginFailure {
        let message = self.user_message();

        if message.to_lowercase().contains("pending")
            || self.code() == Some("PENDING_APPROVAL")
        {
            let message = if message.trim().is_empty() {
                PENDING_APPROVAL_MESSAGE.to_string()
            } else {
                message
            };
            return LoginFailure::PendingApproval(message);
        }

        if self.is_unauthorized() || self.code() == Some("AUTH_ERROR") {
            return LoginFailure::InvalidCredentials;
        }

        LoginFailure::Other(message)
    }
}

impl From<reqwest::Error> for ClientError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        ClientError::from_reqwest(err)
    }
}

impl From<serde_json::Error> for ClientError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        ClientError::from_json(err)
    }
}

impl From<SessionError> for ClientError {
    fn from(source: SessionError) -> Self {
        ClientError::Session { source }
    }
}

impl From<AuthError> for ClientError {
    fn from(source: AuthError) -> Self {
        ClientError::Auth { source }
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
