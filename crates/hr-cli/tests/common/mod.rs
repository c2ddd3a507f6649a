#![allow(dead_code)]

use hr_auth::{
    Identity, MemoryStorage, Navigator, Role, SessionError, SessionResult, SessionStorage,
    SessionStore,
};
use hr_cli::Client;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::io::{Error as IoError, ErrorKind};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Navigator that records every forced location change.
pub struct RecordingNavigator {
    path: Mutex<String>,
    replaced: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    pub fn at(path: &str) -> Arc<Self> {
        Arc::new(Self {
            path: Mutex::new(path.to_string()),
            replaced: Mutex::new(Vec::new()),
        })
    }

    pub fn replaced(&self) -> Vec<String> {
        self.replaced.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn current_path(&self) -> String {
        self.path.lock().unwrap().clone()
    }

    fn replace(&self, path: &str) {
        *self.path.lock().unwrap() = path.to_string();
        self.replaced.lock().unwrap().push(path.to_string());
    }
}

/// In-memory storage that counts removals.
#[derive(Default)]
pub struct CountingStorage {
    inner: MemoryStorage,
    removes: AtomicUsize,
}

impl CountingStorage {
    pub fn removes(&self) -> usize {
        self.removes.load(Ordering::SeqCst)
    }
}

impl SessionStorage for CountingStorage {
    fn read(&self, key: &str) -> SessionResult<Option<String>> {
        self.inner.read(key)
    }

    fn write(&self, key: &str, value: &str) -> SessionResult<()> {
        self.inner.write(key, value)
    }

    fn remove(&self, key: &str) -> SessionResult<()> {
        self.removes.fetch_add(1, Ordering::SeqCst);
        self.inner.remove(key)
    }
}

/// In-memory storage whose removals always fail.
#[derive(Default)]
pub struct StuckStorage {
    inner: MemoryStorage,
}

impl SessionStorage for StuckStorage {
    fn read(&self, key: &str) -> SessionResult<Option<String>> {
        self.inner.read(key)
    }

    fn write(&self, key: &str, value: &str) -> SessionResult<()> {
        self.inner.write(key, value)
    }

    fn remove(&self, key: &str) -> SessionResult<()> {
        Err(SessionError::file_remove(
            PathBuf::from(format!("{key}.json")),
            IoError::new(ErrorKind::PermissionDenied, "read-only"),
        ))
    }
}

pub fn identity(role: Role) -> Identity {
    Identity::new("42", "ada@corp.example", "Ada", "token-abc", role).unwrap()
}

pub fn counting_session() -> (SessionStore, Arc<CountingStorage>) {
    let storage = Arc::new(CountingStorage::default());
    (SessionStore::new(storage.clone(), "user"), storage)
}

pub fn client(base_url: &str, session: SessionStore, navigator: Arc<dyn Navigator>) -> Client {
    Client::new(base_url, Duration::from_secs(5), session, navigator).unwrap()
}
