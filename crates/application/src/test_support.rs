//! Shared test doubles for the session core.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, missing_docs)]

use std::collections::{HashMap, VecDeque};
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::sync::Semaphore;
use warden_domain::{AuthError, AuthResult, NavTarget, ProfileRecord, StoreKey};

use crate::ports::{IdentityGateway, InvalidationNotifier, Navigator, SessionStore};

/// Builds a profile record for tests.
pub fn profile(codenames: &[&str]) -> ProfileRecord {
    ProfileRecord {
        username: "alice".to_string(),
        role: Some("admin".to_string()),
        email: Some("alice@example.com".to_string()),
        codenames: codenames.iter().map(ToString::to_string).collect(),
    }
}

/// In-memory session store sharing its map across clones.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<StoreKey, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seed(&self, key: StoreKey, value: &str) {
        self.entries.lock().unwrap().insert(key, value.to_string());
    }

    pub fn get(&self, key: StoreKey) -> Option<String> {
        self.entries.lock().unwrap().get(&key).cloned()
    }
}

#[async_trait]
impl SessionStore for MemoryStore {
    async fn save(&self, key: StoreKey, value: &str) {
        self.entries.lock().unwrap().insert(key, value.to_string());
    }

    async fn load(&self, key: StoreKey) -> Option<String> {
        self.entries.lock().unwrap().get(&key).cloned()
    }

    async fn remove(&self, key: StoreKey) {
        self.entries.lock().unwrap().remove(&key);
    }
}

/// A navigation event recorded by [`RecordingNavigator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavEvent {
    Soft(NavTarget),
    Hard(NavTarget),
}

/// Navigator recording every requested navigation.
#[derive(Debug, Clone, Default)]
pub struct RecordingNavigator {
    events: Arc<Mutex<Vec<NavEvent>>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<NavEvent> {
        self.events.lock().unwrap().clone()
    }
}

#[async_trait]
impl Navigator for RecordingNavigator {
    async fn navigate(&self, target: NavTarget) {
        self.events.lock().unwrap().push(NavEvent::Soft(target));
    }

    async fn hard_redirect(&self, target: NavTarget) {
        self.events.lock().unwrap().push(NavEvent::Hard(target));
    }
}

#[derive(Debug)]
struct NotifierInner {
    count: AtomicUsize,
    gated: bool,
    shown: Semaphore,
    ack: Semaphore,
}

/// Counting notifier. In the `closed` mode the notification stays "on
/// screen" until [`GateNotifier::acknowledge`] is called.
#[derive(Debug, Clone)]
pub struct GateNotifier {
    inner: Arc<NotifierInner>,
}

impl GateNotifier {
    fn with_gate(gated: bool) -> Self {
        Self {
            inner: Arc::new(NotifierInner {
                count: AtomicUsize::new(0),
                gated,
                shown: Semaphore::new(0),
                ack: Semaphore::new(0),
            }),
        }
    }

    /// Notifications acknowledge themselves immediately.
    pub fn open() -> Self {
        Self::with_gate(false)
    }

    /// Notifications wait for an explicit acknowledgment.
    pub fn closed() -> Self {
        Self::with_gate(true)
    }

    pub fn count(&self) -> usize {
        self.inner.count.load(Ordering::SeqCst)
    }

    /// Waits until a notification has been shown.
    pub async fn wait_shown(&self) {
        self.inner.shown.acquire().await.unwrap().forget();
    }

    /// Acknowledges the pending notification.
    pub fn acknowledge(&self) {
        self.inner.ack.add_permits(1);
    }
}

#[async_trait]
impl InvalidationNotifier for GateNotifier {
    async fn notify_and_wait(&self) {
        self.inner.count.fetch_add(1, Ordering::SeqCst);
        self.inner.shown.add_permits(1);
        if self.inner.gated {
            self.inner.ack.acquire().await.unwrap().forget();
        }
    }
}

#[derive(Debug)]
struct GatewayInner {
    exchange_results: Mutex<VecDeque<AuthResult<String>>>,
    profile_results: Mutex<VecDeque<AuthResult<ProfileRecord>>>,
    notify_result: Mutex<AuthResult<()>>,
    bearer: Mutex<Option<String>>,
    exchange_calls: AtomicUsize,
    profile_calls: AtomicUsize,
    notify_calls: AtomicUsize,
    profile_gated: AtomicBool,
    profile_entered: Semaphore,
    profile_gate: Semaphore,
}

/// Scripted identity gateway. Clones share all state, so a test can
/// hold one handle while the manager owns another.
#[derive(Debug, Clone)]
pub struct MockGateway {
    inner: Arc<GatewayInner>,
}

impl MockGateway {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(GatewayInner {
                exchange_results: Mutex::new(VecDeque::new()),
                profile_results: Mutex::new(VecDeque::new()),
                notify_result: Mutex::new(Ok(())),
                bearer: Mutex::new(None),
                exchange_calls: AtomicUsize::new(0),
                profile_calls: AtomicUsize::new(0),
                notify_calls: AtomicUsize::new(0),
                profile_gated: AtomicBool::new(false),
                profile_entered: Semaphore::new(0),
                profile_gate: Semaphore::new(0),
            }),
        }
    }

    pub fn push_exchange(&self, result: AuthResult<String>) {
        self.inner.exchange_results.lock().unwrap().push_back(result);
    }

    pub fn push_profile(&self, result: AuthResult<ProfileRecord>) {
        self.inner.profile_results.lock().unwrap().push_back(result);
    }

    pub fn set_notify_result(&self, result: AuthResult<()>) {
        *self.inner.notify_result.lock().unwrap() = result;
    }

    /// Makes the next profile fetch block until [`Self::release_profile`].
    pub fn gate_profile(&self) {
        self.inner.profile_gated.store(true, Ordering::SeqCst);
    }

    pub fn release_profile(&self) {
        self.inner.profile_gate.add_permits(1);
    }

    /// Waits until a profile fetch has been entered.
    pub async fn wait_profile_entered(&self) {
        self.inner.profile_entered.acquire().await.unwrap().forget();
    }

    pub fn bearer(&self) -> Option<String> {
        self.inner.bearer.lock().unwrap().clone()
    }

    pub fn exchange_calls(&self) -> usize {
        self.inner.exchange_calls.load(Ordering::SeqCst)
    }

    pub fn profile_calls(&self) -> usize {
        self.inner.profile_calls.load(Ordering::SeqCst)
    }

    pub fn notify_calls(&self) -> usize {
        self.inner.notify_calls.load(Ordering::SeqCst)
    }
}

impl Default for MockGateway {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl IdentityGateway for MockGateway {
    async fn exchange_credentials(&self, _username: &str, _password: &str) -> AuthResult<String> {
        self.inner.exchange_calls.fetch_add(1, Ordering::SeqCst);
        self.inner
            .exchange_results
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(AuthError::credential("no scripted exchange result")))
    }

    async fn fetch_profile(&self, _username: &str) -> AuthResult<ProfileRecord> {
        self.inner.profile_calls.fetch_add(1, Ordering::SeqCst);
        self.inner.profile_entered.add_permits(1);
        if self.inner.profile_gated.load(Ordering::SeqCst) {
            self.inner.profile_gate.acquire().await.unwrap().forget();
        }
        self.inner
            .profile_results
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(AuthError::profile_fetch("no scripted profile result")))
    }

    async fn notify_logout(&self, _username: &str) -> AuthResult<()> {
        self.inner.notify_calls.fetch_add(1, Ordering::SeqCst);
        self.inner.notify_result.lock().unwrap().clone()
    }

    async fn set_bearer_token(&self, token: Option<String>) {
        *self.inner.bearer.lock().unwrap() = token;
    }
}
