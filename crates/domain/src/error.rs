//! Session error types

use thiserror::Error;

/// Errors that can occur while establishing or refreshing a session.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// The credential exchange was rejected or the response carried no
    /// usable token.
    #[error("credential exchange failed: {0}")]
    Credential(String),

    /// The profile endpoint was unreachable, rejected the request or
    /// returned a malformed payload.
    #[error("profile fetch failed: {0}")]
    ProfileFetch(String),

    /// The logout notification could not be delivered. Always treated
    /// as non-fatal by callers.
    #[error("logout notification failed: {0}")]
    Notify(String),

    /// The session was cleared by another party while the operation was
    /// in flight; its final write was aborted instead of resurrecting
    /// the dead session.
    #[error("session superseded during operation")]
    Superseded,
}

impl AuthError {
    /// Creates a credential error.
    pub fn credential(message: impl Into<String>) -> Self {
        Self::Credential(message.into())
    }

    /// Creates a profile fetch error.
    pub fn profile_fetch(message: impl Into<String>) -> Self {
        Self::ProfileFetch(message.into())
    }
}

/// Result type alias for session operations.
pub type AuthResult<T> = Result<T, AuthError>;
