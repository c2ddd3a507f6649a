use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Unknown role '{role}': expected one of ROLE_ADMIN, ROLE_HR, ROLE_USER {location}")]
    UnknownRole {
        role: String,
        location: ErrorLocation,
    },

    #[error("Identity field '{field}' is missing or empty {location}")]
    MissingField {
        field: &'static str,
        location: ErrorLocation,
    },
}

impl AuthError {
    #[track_caller]
    pub fn unknown_role(role: impl Into<String>) -> Self {
        Self::UnknownRole {
            role: role.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn missing_field(field: &'static str) -> Self {
        Self::MissingField {
            field,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Stable code for logs and CLI output.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownRole { .. } => "UNKNOWN_ROLE",
            Self::MissingField { .. } => "MISSING_FIELD",
        }
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;
