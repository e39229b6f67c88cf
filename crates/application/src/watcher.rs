//! Session-invalidation watcher.
//!
//! Observes the authorization outcome of every inbound API response.
//! On the first unauthorized signal it shows exactly one user-facing
//! notification; triggers arriving while that notification is pending
//! are suppressed by a boolean latch. Once the user acknowledges, the
//! persisted credential and user snapshot are removed, the latch is
//! reset and a hard navigation to the login destination is requested.
//!
//! The watcher never reaches into the state machine's in-memory
//! fields: persisted storage is the source of truth it resets, and the
//! hard navigation (full reload semantics) reinitializes everything
//! else.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use warden_domain::{AuthOutcome, NavTarget, StoreKey};

use crate::ports::{InvalidationNotifier, Navigator, ResponseObserver, SessionStore};

#[derive(Debug)]
struct WatcherInner<S, N, I> {
    store: S,
    navigator: N,
    notifier: I,
    showing: AtomicBool,
}

/// The invalidation watcher. Cheap to clone; clones share the latch.
#[derive(Debug)]
pub struct InvalidationWatcher<S, N, I> {
    inner: Arc<WatcherInner<S, N, I>>,
}

impl<S, N, I> Clone for InvalidationWatcher<S, N, I> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S, N, I> InvalidationWatcher<S, N, I>
where
    S: SessionStore,
    N: Navigator,
    I: InvalidationNotifier,
{
    /// Creates a watcher over the given store, navigator and notifier.
    pub fn new(store: S, navigator: N, notifier: I) -> Self {
        Self {
            inner: Arc::new(WatcherInner {
                store,
                navigator,
                notifier,
                showing: AtomicBool::new(false),
            }),
        }
    }

    /// Handles one observed outcome, running the full invalidation
    /// flow to completion when it is the first unauthorized trigger.
    pub async fn observe(&self, outcome: AuthOutcome) {
        if !outcome.is_unauthorized() {
            return;
        }

        // Latch: only the first trigger gets through until the user
        // acknowledges the notification.
        if self.inner.showing.swap(true, Ordering::SeqCst) {
            return;
        }

        tracing::info!("session invalidation detected, notifying user");
        self.inner.notifier.notify_and_wait().await;

        self.inner.store.remove(StoreKey::Token).await;
        self.inner.store.remove(StoreKey::User).await;
        self.inner.showing.store(false, Ordering::SeqCst);

        self.inner.navigator.hard_redirect(NavTarget::Login).await;
    }
}

#[async_trait]
impl<S, N, I> ResponseObserver for InvalidationWatcher<S, N, I>
where
    S: SessionStore + 'static,
    N: Navigator + 'static,
    I: InvalidationNotifier + 'static,
{
    async fn on_response(&self, outcome: AuthOutcome) {
        if !outcome.is_unauthorized() {
            return;
        }
        // The flow waits for the user's acknowledgment; run it off the
        // hook so the pipeline call that detected the signal is not
        // held up behind it.
        let watcher = self.clone();
        tokio::spawn(async move { watcher.observe(outcome).await });
    }
}
