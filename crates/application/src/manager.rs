//! The session state machine.
//!
//! `SessionManager` is the explicitly owned context object holding the
//! one in-memory [`Session`] per running client. It drives login,
//! logout, initialization-on-load and profile refresh, mirrors the
//! credential into the session store and the gateway's default
//! authorization header, and guarantees that every failure leaves the
//! session either fully authenticated or fully empty.
//!
//! No lock is held across a remote call. Each operation that resumes
//! after an await re-checks the `generation` counter instead of
//! assuming the session is unchanged, so a logout triggered elsewhere
//! (for instance by the invalidation watcher) is never silently
//! overwritten by a stale continuation.

use tokio::sync::RwLock;
use warden_domain::{
    AuthError, AuthResult, NavTarget, PersistedUser, Session, StoreKey, UserProfile,
};

use crate::ports::{IdentityGateway, Navigator, SessionStore};
use crate::route_guard::{self, RouteDecision};

/// The lifecycle phase of the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionPhase {
    /// No session is established.
    #[default]
    Unauthenticated,
    /// A login or restore is in flight.
    Authenticating,
    /// A full session is established.
    Authenticated,
    /// The session is established but its profile data is being
    /// refreshed.
    ProfileStale,
}

impl SessionPhase {
    /// Returns true for the two established sub-phases.
    #[must_use]
    pub const fn is_established(self) -> bool {
        matches!(self, Self::Authenticated | Self::ProfileStale)
    }
}

#[derive(Debug, Default)]
struct ManagerState {
    phase: SessionPhase,
    session: Session,
    generation: u64,
}

/// The session state machine, generic over its three ports.
#[derive(Debug)]
pub struct SessionManager<G, S, N> {
    gateway: G,
    store: S,
    navigator: N,
    state: RwLock<ManagerState>,
}

impl<G, S, N> SessionManager<G, S, N>
where
    G: IdentityGateway,
    S: SessionStore,
    N: Navigator,
{
    /// Creates a manager with an empty session.
    pub fn new(gateway: G, store: S, navigator: N) -> Self {
        Self {
            gateway,
            store,
            navigator,
            state: RwLock::new(ManagerState::default()),
        }
    }

    /// Exchanges credentials for a token, refreshes the profile and
    /// transitions to `Authenticated`.
    ///
    /// On success a default codename is selected and navigation to the
    /// home destination is signalled. On any failure the session rolls
    /// back to empty before the error is returned; no partial state is
    /// observable. Presentation of failures is the caller's concern.
    ///
    /// # Errors
    ///
    /// - [`AuthError::Credential`] when the exchange is rejected or
    ///   carries no token;
    /// - [`AuthError::ProfileFetch`] when the subsequent profile
    ///   refresh fails;
    /// - [`AuthError::Superseded`] when a logout landed while the
    ///   login was in flight, in which case the login's own final
    ///   write is abandoned rather than resurrecting the session.
    pub async fn login(&self, username: &str, password: &str) -> AuthResult<()> {
        let entry_generation = {
            let mut state = self.state.write().await;
            state.phase = SessionPhase::Authenticating;
            state.generation
        };

        let token = match self.gateway.exchange_credentials(username, password).await {
            Ok(token) => token,
            Err(err) => {
                self.rollback().await;
                return Err(err);
            }
        };

        self.gateway.set_bearer_token(Some(token.clone())).await;
        {
            let mut state = self.state.write().await;
            state.session = Session {
                token: Some(token.clone()),
                user: Some(UserProfile::provisional(username)),
                selected_codename: None,
            };
        }
        self.store.save(StoreKey::Token, &token).await;

        if let Err(err) = self.fetch_current_user_details(username, false).await {
            self.rollback().await;
            return Err(err);
        }

        {
            let mut state = self.state.write().await;
            if state.generation != entry_generation {
                drop(state);
                self.rollback().await;
                return Err(AuthError::Superseded);
            }
            state.phase = SessionPhase::Authenticated;
        }

        self.navigator.navigate(NavTarget::Home).await;
        Ok(())
    }

    /// Clears the session unconditionally and signals navigation to
    /// the login destination.
    ///
    /// The remote logout notification is best-effort: a failure is
    /// logged and never blocks the local logout. Idempotent — calling
    /// this when already unauthenticated only re-signals navigation.
    pub async fn logout(&self) {
        let username = {
            let state = self.state.read().await;
            state.session.user.as_ref().map(|u| u.username.clone())
        };

        if let Some(username) = username
            && let Err(err) = self.gateway.notify_logout(&username).await
        {
            tracing::warn!(%username, error = %err, "logout notification failed");
        }

        self.gateway.set_bearer_token(None).await;
        {
            let mut state = self.state.write().await;
            state.session.clear();
            state.phase = SessionPhase::Unauthenticated;
            state.generation += 1;
        }
        self.store.remove(StoreKey::Token).await;
        self.store.remove(StoreKey::User).await;

        self.navigator.navigate(NavTarget::Login).await;
    }

    /// Restores a persisted session at startup.
    ///
    /// Without a persisted credential the session stays empty and no
    /// network call is made. With one, the credential is installed
    /// optimistically and the profile is refreshed with
    /// logout-on-error enabled, so an unreachable or rejecting profile
    /// endpoint forces a logout instead of leaving a stale session
    /// looking authenticated. A credential without a recoverable
    /// username also forces a logout. Never surfaces an error: there
    /// is no interactive caller to show it to.
    pub async fn initialize_auth(&self) {
        let Some(token) = self.store.load(StoreKey::Token).await else {
            return;
        };

        self.gateway.set_bearer_token(Some(token.clone())).await;

        let snapshot = self
            .store
            .load(StoreKey::User)
            .await
            .and_then(|raw| serde_json::from_str::<PersistedUser>(&raw).ok())
            .filter(|snapshot| !snapshot.username.is_empty());

        let Some(snapshot) = snapshot else {
            tracing::warn!("persisted credential without a usable user snapshot, logging out");
            self.logout().await;
            return;
        };

        let username = snapshot.username.clone();
        {
            let mut state = self.state.write().await;
            state.phase = SessionPhase::Authenticating;
            state.session = Session {
                token: Some(token),
                user: Some(snapshot.into_profile()),
                selected_codename: None,
            };
        }

        if let Err(err) = self.fetch_current_user_details(&username, true).await {
            tracing::debug!(error = %err, "session restore failed, session cleared");
        }
    }

    /// Refreshes the user's profile under the installed credential.
    ///
    /// On success the role, email and codename list are updated and
    /// the codename selection policy is applied: a still-valid
    /// selection is kept, otherwise the first codename is selected,
    /// and an empty list clears the selection without error. The
    /// refreshed snapshot is persisted.
    ///
    /// # Errors
    ///
    /// On failure, with `logout_on_error` a full [`Self::logout`] runs
    /// before the error is returned; without it the session is left
    /// untouched and the caller decides the rollback.
    pub async fn fetch_current_user_details(
        &self,
        username: &str,
        logout_on_error: bool,
    ) -> AuthResult<()> {
        let entry_generation = {
            let mut state = self.state.write().await;
            if state.phase == SessionPhase::Authenticated {
                state.phase = SessionPhase::ProfileStale;
            }
            state.generation
        };

        let profile = match self.gateway.fetch_profile(username).await {
            Ok(profile) => profile,
            Err(err) => {
                if logout_on_error {
                    self.logout().await;
                } else {
                    let mut state = self.state.write().await;
                    if state.phase == SessionPhase::ProfileStale
                        && state.generation == entry_generation
                    {
                        state.phase = SessionPhase::Authenticated;
                    }
                }
                return Err(err);
            }
        };

        let snapshot = {
            let mut state = self.state.write().await;
            if state.generation != entry_generation {
                return Err(AuthError::Superseded);
            }
            if let Some(user) = state.session.user.as_mut() {
                user.role = profile.role;
                user.email = profile.email;
            }
            state.session.apply_codenames(profile.codenames);
            if state.phase != SessionPhase::Unauthenticated {
                state.phase = SessionPhase::Authenticated;
            }
            state.session.user.as_ref().map(PersistedUser::from)
        };

        if let Some(snapshot) = snapshot
            && let Ok(raw) = serde_json::to_string(&snapshot)
        {
            self.store.save(StoreKey::User, &raw).await;
        }

        Ok(())
    }

    /// Selects the codename scoping subsequent requests.
    ///
    /// Membership is not validated here: callers are expected to pass
    /// a value drawn from [`Self::available_codenames`] and to keep
    /// their own views in sync.
    pub async fn set_selected_codename(&self, code: impl Into<String>) {
        let mut state = self.state.write().await;
        state.session.selected_codename = Some(code.into());
    }

    /// Applies the route guard to a navigation attempt using the
    /// current session state.
    pub async fn guard_navigation(&self, target_path: &str) -> RouteDecision {
        route_guard::decide(self.is_authenticated().await, target_path)
    }

    /// Returns a snapshot of the current session.
    pub async fn session(&self) -> Session {
        self.state.read().await.session.clone()
    }

    /// Returns the current lifecycle phase.
    pub async fn phase(&self) -> SessionPhase {
        self.state.read().await.phase
    }

    /// Returns true if both credential and user are present.
    pub async fn is_authenticated(&self) -> bool {
        self.state.read().await.session.is_authenticated()
    }

    /// Returns the currently selected codename, if any.
    pub async fn selected_codename(&self) -> Option<String> {
        self.state.read().await.session.selected_codename.clone()
    }

    /// Returns the codenames available to the current user.
    pub async fn available_codenames(&self) -> Vec<String> {
        self.state.read().await.session.available_codenames().to_vec()
    }

    /// Returns true if the current user carries the administrator role.
    pub async fn is_admin(&self) -> bool {
        self.state.read().await.session.is_admin()
    }

    /// Rolls the session back to empty without the logout side
    /// channel: no remote notification, no navigation signal.
    async fn rollback(&self) {
        self.gateway.set_bearer_token(None).await;
        {
            let mut state = self.state.write().await;
            state.session.clear();
            state.phase = SessionPhase::Unauthenticated;
        }
        self.store.remove(StoreKey::Token).await;
        self.store.remove(StoreKey::User).await;
    }
}
