//! Persistent session store port

use async_trait::async_trait;
use warden_domain::StoreKey;

/// Port for persisting the session across restarts.
///
/// Operates on exactly two logical keys (credential and user
/// snapshot), both raw strings. All operations are infallible at this
/// boundary: an adapter without a usable persistence medium degrades
/// silently — loads return `None`, saves and removes are dropped. The
/// state machine behaves identically either way, minus persistence.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Stores `value` under `key`.
    async fn save(&self, key: StoreKey, value: &str);

    /// Loads the value stored under `key`, if any.
    async fn load(&self, key: StoreKey) -> Option<String>;

    /// Removes the value stored under `key`.
    async fn remove(&self, key: StoreKey);
}
