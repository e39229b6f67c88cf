//! Invalidation notification port

use async_trait::async_trait;

/// Port for the single user-facing session-expired notification.
#[async_trait]
pub trait InvalidationNotifier: Send + Sync {
    /// Shows the notification and resolves once the user acknowledges
    /// it. The watcher suppresses further triggers until then.
    async fn notify_and_wait(&self);
}
