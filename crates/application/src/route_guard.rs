//! Route guard.
//!
//! Consulted before each navigation attempt: unauthenticated users are
//! redirected away from protected routes, authenticated users away
//! from the login route. No other route is restricted at this layer.

use warden_domain::NavTarget;

/// The guard's verdict for a navigation attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDecision {
    /// Let the navigation proceed.
    Allow,
    /// Redirect to the given destination instead.
    Redirect(NavTarget),
}

/// Decides whether a navigation to `target_path` may proceed.
#[must_use]
pub fn decide(authenticated: bool, target_path: &str) -> RouteDecision {
    let login_path = NavTarget::Login.path();

    if !authenticated && target_path != login_path {
        return RouteDecision::Redirect(NavTarget::Login);
    }

    if authenticated && target_path == login_path {
        return RouteDecision::Redirect(NavTarget::Home);
    }

    RouteDecision::Allow
}
