//! Session store adapters.
//!
//! Three implementations of the infallible store port: a file-backed
//! store for durable contexts, an in-memory store for embedders
//! without one, and a null store that drops everything. I/O failures
//! are logged and degrade silently so the state machine behaves
//! identically, minus persistence, in every context.

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use warden_application::ports::SessionStore;
use warden_domain::StoreKey;

/// File-backed session store: one file per logical key under a state
/// directory.
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    dir: PathBuf,
}

impl FileSessionStore {
    /// Creates a store rooted at `dir`. The directory is created
    /// lazily on the first save.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: StoreKey) -> PathBuf {
        self.dir.join(key.name())
    }
}

#[async_trait]
impl SessionStore for FileSessionStore {
    async fn save(&self, key: StoreKey, value: &str) {
        if let Err(err) = tokio::fs::create_dir_all(&self.dir).await {
            tracing::warn!(dir = %self.dir.display(), error = %err, "session store unavailable, dropping save");
            return;
        }
        if let Err(err) = tokio::fs::write(self.path_for(key), value).await {
            tracing::warn!(key = key.name(), error = %err, "failed to persist session entry");
        }
    }

    async fn load(&self, key: StoreKey) -> Option<String> {
        match tokio::fs::read_to_string(self.path_for(key)).await {
            Ok(value) => Some(value),
            Err(err) if err.kind() == ErrorKind::NotFound => None,
            Err(err) => {
                tracing::warn!(key = key.name(), error = %err, "failed to read session entry");
                None
            }
        }
    }

    async fn remove(&self, key: StoreKey) {
        match tokio::fs::remove_file(self.path_for(key)).await {
            Ok(()) => {}
            Err(err) if err.kind() == ErrorKind::NotFound => {}
            Err(err) => {
                tracing::warn!(key = key.name(), error = %err, "failed to remove session entry");
            }
        }
    }
}

/// In-memory session store. Clones share the same map.
#[derive(Debug, Clone, Default)]
pub struct MemorySessionStore {
    entries: Arc<RwLock<HashMap<StoreKey, String>>>,
}

impl MemorySessionStore {
    /// Creates an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn save(&self, key: StoreKey, value: &str) {
        self.entries.write().await.insert(key, value.to_string());
    }

    async fn load(&self, key: StoreKey) -> Option<String> {
        self.entries.read().await.get(&key).cloned()
    }

    async fn remove(&self, key: StoreKey) {
        self.entries.write().await.remove(&key);
    }
}

/// A store for contexts without any persistence medium: loads return
/// nothing, saves and removes are dropped.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSessionStore;

#[async_trait]
impl SessionStore for NullSessionStore {
    async fn save(&self, _key: StoreKey, _value: &str) {}

    async fn load(&self, _key: StoreKey) -> Option<String> {
        None
    }

    async fn remove(&self, _key: StoreKey) {}
}
