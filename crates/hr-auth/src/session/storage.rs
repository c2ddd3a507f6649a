use crate::session::error::{Result as SessionResult, SessionError};

use std::collections::HashMap;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::PathBuf;
use std::sync::{Mutex, PoisonError};

use log::debug;

/// Durable key/value slot the session record lives in.
pub trait SessionStorage: Send + Sync {
    fn read(&self, key: &str) -> SessionResult<Option<String>>;
    fn write(&self, key: &str, value: &str) -> SessionResult<()>;
    /// Removing a missing key is not an error.
    fn remove(&self, key: &str) -> SessionResult<()>;
}

/// One JSON file per key inside a directory.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl SessionStorage for FileStorage {
    fn read(&self, key: &str) -> SessionResult<Option<String>> {
        let path = self.path_for(key);

        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(SessionError::file_read(path, e)),
        }
    }

    /// Atomic write: temp file, fsync, rename over the final path.
    fn write(&self, key: &str, value: &str) -> SessionResult<()> {
        fs::create_dir_all(&self.dir).map_err(|e| SessionError::dir_creation(self.dir.clone(), e))?;

        let final_path = self.path_for(key);
        let temp_path = self
            .dir
            .join(format!("{key}.json.tmp.{}", std::process::id()));

        {
            let mut file = fs::File::create(&temp_path)
                .map_err(|e| SessionError::file_write(temp_path.clone(), e))?;

            file.write_all(value.as_bytes())
                .map_err(|e| SessionError::file_write(temp_path.clone(), e))?;

            file.sync_all()
                .map_err(|e| SessionError::file_write(temp_path.clone(), e))?;
        }

        fs::rename(&temp_path, &final_path).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            SessionError::atomic_rename(temp_path, final_path.clone(), e)
        })?;

        debug!("Wrote session record to {final_path:?}");
        Ok(())
    }

    fn remove(&self, key: &str) -> SessionResult<()> {
        let path = self.path_for(key);

        match fs::remove_file(&path) {
            Ok(()) => {
                debug!("Removed session record at {path:?}");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(SessionError::file_remove(path, e)),
        }
    }
}

/// Process-local storage for tests and embedders without a filesystem.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStorage for MemoryStorage {
    fn read(&self, key: &str) -> SessionResult<Option<String>> {
        let values = self.values.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(values.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> SessionResult<()> {
        let mut values = self.values.lock().unwrap_or_else(PoisonError::into_inner);
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> SessionResult<()> {
        let mut values = self.values.lock().unwrap_or_else(PoisonError::into_inner);
        values.remove(key);
        Ok(())
    }
}
