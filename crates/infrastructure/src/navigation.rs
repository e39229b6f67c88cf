//! Navigation and notification shims for embedding shells.

use async_trait::async_trait;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use warden_application::ports::{InvalidationNotifier, Navigator};
use warden_domain::NavTarget;

/// A navigation request emitted by the session core for the embedding
/// UI to act on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationEvent {
    /// Client-side route change.
    Navigate(NavTarget),
    /// Hard navigation: discard all in-memory state, then load the
    /// target.
    HardRedirect(NavTarget),
}

/// Navigator forwarding requests over a channel to the embedding UI.
#[derive(Debug, Clone)]
pub struct ChannelNavigator {
    tx: UnboundedSender<NavigationEvent>,
}

impl ChannelNavigator {
    /// Creates a navigator and the receiver the UI drains.
    #[must_use]
    pub fn new() -> (Self, UnboundedReceiver<NavigationEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    fn emit(&self, event: NavigationEvent) {
        // A dropped receiver means no UI is listening; nothing to do.
        if self.tx.send(event).is_err() {
            tracing::debug!(?event, "navigation event dropped, no receiver");
        }
    }
}

#[async_trait]
impl Navigator for ChannelNavigator {
    async fn navigate(&self, target: NavTarget) {
        self.emit(NavigationEvent::Navigate(target));
    }

    async fn hard_redirect(&self, target: NavTarget) {
        self.emit(NavigationEvent::HardRedirect(target));
    }
}

/// Notifier for headless embedders: logs the invalidation and
/// acknowledges immediately.
#[derive(Debug, Clone, Copy, Default)]
pub struct AutoAckNotifier;

#[async_trait]
impl InvalidationNotifier for AutoAckNotifier {
    async fn notify_and_wait(&self) {
        tracing::warn!("session expired, please log in again");
    }
}
