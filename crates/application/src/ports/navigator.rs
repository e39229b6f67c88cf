//! Navigation port

use async_trait::async_trait;
use warden_domain::NavTarget;

/// Port for requesting navigation from the embedding shell.
#[async_trait]
pub trait Navigator: Send + Sync {
    /// Requests a client-side route change.
    async fn navigate(&self, target: NavTarget);

    /// Requests a hard navigation (full reload semantics): every piece
    /// of in-memory state, including other components' caches, is
    /// discarded before the target loads.
    async fn hard_redirect(&self, target: NavTarget);
}
