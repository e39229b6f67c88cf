//! Remote identity gateway port

use async_trait::async_trait;
use warden_domain::{AuthResult, ProfileRecord};

/// Port for the remote identity service.
///
/// Three independently failable operations plus the single
/// default-authorization-header slot shared by every authenticated
/// call. The header is updated exactly when the credential changes,
/// and only by the session state machine.
#[async_trait]
pub trait IdentityGateway: Send + Sync {
    /// Exchanges credentials for an opaque bearer token.
    ///
    /// # Errors
    ///
    /// Returns [`warden_domain::AuthError::Credential`] when the
    /// exchange is rejected or the response carries no usable token.
    async fn exchange_credentials(&self, username: &str, password: &str) -> AuthResult<String>;

    /// Fetches the full profile for `username` under the installed
    /// credential, normalized to a [`ProfileRecord`].
    ///
    /// # Errors
    ///
    /// Returns [`warden_domain::AuthError::ProfileFetch`] on transport
    /// failure, a non-success payload discriminator or missing data.
    async fn fetch_profile(&self, username: &str) -> AuthResult<ProfileRecord>;

    /// Notifies the remote service of a logout. Best-effort: callers
    /// must never treat a failure as fatal.
    ///
    /// # Errors
    ///
    /// Returns [`warden_domain::AuthError::Notify`] on transport
    /// failure; callers log and ignore it.
    async fn notify_logout(&self, username: &str) -> AuthResult<()>;

    /// Installs or removes the default authorization header.
    async fn set_bearer_token(&self, token: Option<String>);
}
