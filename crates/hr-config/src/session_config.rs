use crate::{ConfigError, ConfigErrorResult, DEFAULT_STORAGE_KEY, MAX_STORAGE_KEY_LENGTH};

use serde::Deserialize;

/// Where the signed-in identity is persisted between runs
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Fixed storage key; the record lives at `<config dir>/<key>.json`
    pub storage_key: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            storage_key: String::from(DEFAULT_STORAGE_KEY),
        }
    }
}

impl SessionConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.storage_key.is_empty() {
            return Err(ConfigError::session("session.storage_key cannot be empty"));
        }

        if self.storage_key.len() > MAX_STORAGE_KEY_LENGTH {
            return Err(ConfigError::session(format!(
                "session.storage_key must be at most {} characters, got {}",
                MAX_STORAGE_KEY_LENGTH,
                self.storage_key.len()
            )));
        }

        // The key becomes a file name
        let valid = self
            .storage_key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(ConfigError::session(format!(
                "session.storage_key may only contain letters, digits, '-' and '_', got '{}'",
                self.storage_key
            )));
        }

        Ok(())
    }
}
