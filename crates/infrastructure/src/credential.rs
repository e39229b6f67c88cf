//! The shared default-authorization-header slot.

use std::sync::Arc;
use tokio::sync::RwLock;

/// The single slot holding the bearer credential applied to every
/// authenticated call.
///
/// The identity gateway and the response pipeline share one slot, so
/// header management stays centralized in the session state machine
/// (which installs the token on set and removes it on clear) instead
/// of being duplicated per call site.
#[derive(Debug, Clone, Default)]
pub struct BearerSlot {
    inner: Arc<RwLock<Option<String>>>,
}

impl BearerSlot {
    /// Creates an empty slot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs or removes the credential.
    pub async fn install(&self, token: Option<String>) {
        *self.inner.write().await = token;
    }

    /// Returns the installed credential, if any.
    pub async fn get(&self) -> Option<String> {
        self.inner.read().await.clone()
    }

    /// Applies the credential to a request, when one is installed.
    pub async fn apply(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.get().await {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }
}
