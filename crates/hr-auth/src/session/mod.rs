pub(crate) mod error;
pub(crate) mod load_result;
pub(crate) mod storage;

pub use error::{Result as SessionResult, SessionError};
pub use load_result::LoadResult;
pub use storage::{FileStorage, MemoryStorage, SessionStorage};

use crate::Identity;
use crate::identity::PersistedIdentity;

use std::path::PathBuf;
use std::sync::Arc;

use log::{debug, info, warn};

/// Default storage key the identity record is kept under.
pub const DEFAULT_STORAGE_KEY: &str = "user";

/// Persists exactly one identity record under a fixed key.
#[derive(Clone)]
pub struct SessionStore {
    storage: Arc<dyn SessionStorage>,
    key: String,
}

impl SessionStore {
    pub fn new(storage: Arc<dyn SessionStorage>, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    /// File-backed store writing `<dir>/<key>.json`.
    pub fn file(dir: impl Into<PathBuf>, key: impl Into<String>) -> Self {
        Self::new(Arc::new(FileStorage::new(dir)), key)
    }

    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStorage::new()), DEFAULT_STORAGE_KEY)
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Loads the persisted identity, or `None` when nothing usable is stored.
    ///
    /// An unparseable or incomplete record is cleared as a side effect.
    pub fn load(&self) -> SessionResult<Option<Identity>> {
        Ok(self.load_detailed()?.identity)
    }

    /// Like [`SessionStore::load`] but reports why a record was discarded.
    ///
    /// Returns:
    /// - `identity: Some(..)` - loaded successfully
    /// - `identity: None, discarded: None` - nothing stored
    /// - `identity: None, discarded: Some(..)` - record was corrupt and has been cleared
    pub fn load_detailed(&self) -> SessionResult<LoadResult> {
        let Some(contents) = self.storage.read(&self.key)? else {
            debug!("No session record under '{}'", self.key);
            return Ok(LoadResult::default());
        };

        let reason = match serde_json::from_str::<PersistedIdentity>(&contents) {
            Ok(record) => match record.into_identity() {
                Ok(identity) => {
                    info!("Restored session for {} ({})", identity.email, identity.role);
                    return Ok(LoadResult {
                        identity: Some(identity),
                        discarded: None,
                    });
                }
                Err(e) => e.to_string(),
            },
            Err(e) => e.to_string(),
        };

        warn!("Discarding session record '{}': {reason}", self.key);
        self.clear()?;

        Ok(LoadResult {
            identity: None,
            discarded: Some(reason),
        })
    }

    /// Overwrites the persisted record.
    pub fn save(&self, identity: &Identity) -> SessionResult<()> {
        let json = serde_json::to_string_pretty(&PersistedIdentity::from(identity))?;
        self.storage.write(&self.key, &json)?;

        info!("Saved session for {}", identity.email);
        Ok(())
    }

    /// Removes the persisted record. Idempotent.
    pub fn clear(&self) -> SessionResult<()> {
        self.storage.remove(&self.key)
    }

    /// Token of whatever identity is persisted right now.
    ///
    /// Read failures degrade to an unauthenticated request.
    pub fn current_token(&self) -> Option<String> {
        match self.load() {
            Ok(identity) => identity.map(|identity| identity.token),
            Err(e) => {
                warn!("Could not read session record: {e}");
                None
            }
        }
    }
}
