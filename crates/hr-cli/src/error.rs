use crate::client::ClientError;

use hr_config::ConfigError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Failures of one `hr` invocation.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("not signed in (requested {path}) {location}")]
    NotSignedIn {
        path: String,
        location: ErrorLocation,
    },

    #[error("access denied for {role} (requested {path}) {location}")]
    AccessDenied {
        path: String,
        role: String,
        location: ErrorLocation,
    },

    #[error("session is still loading {location}")]
    Suspended { location: ErrorLocation },

    #[error("invalid input: {message} {location}")]
    InvalidInput {
        message: String,
        location: ErrorLocation,
    },

    #[error("logger error: {message} {location}")]
    Logger {
        message: String,
        location: ErrorLocation,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Client(#[from] ClientError),

    #[error("failed to serialize output: {0}")]
    Output(#[from] serde_json::Error),
}

impl CliError {
    #[track_caller]
    pub fn not_signed_in(path: impl Into<String>) -> Self {
        Self::NotSignedIn {
            path: path.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn access_denied(path: impl Into<String>, role: impl Into<String>) -> Self {
        Self::AccessDenied {
            path: path.into(),
            role: role.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn suspended() -> Self {
        Self::Suspended {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn logger(message: impl Into<String>) -> Self {
        Self::Logger {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// One-line message for stderr.
    pub fn user_message(&self) -> String {
        match self {
            CliError::NotSignedIn { .. } => "not signed in; run `hr login` first".to_string(),
            CliError::AccessDenied { path, role, .. } => {
                format!("access denied: {role} may not open {path}")
            }
            CliError::Suspended { .. } => "session is still loading".to_string(),
            CliError::InvalidInput { message, .. } => message.clone(),
            CliError::Client(err) if err.is_unauthorized() => {
                "session expired or was rejected; run `hr login` again".to_string()
            }
            CliError::Client(err) => err.user_message(),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CliError>;
