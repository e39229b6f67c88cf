//! Navigation targets shared by the state machine, route guard and
//! invalidation watcher.

use serde::{Deserialize, Serialize};

/// A navigation destination the session core can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NavTarget {
    /// The login page.
    Login,
    /// The post-login home destination.
    Home,
}

impl NavTarget {
    /// Returns the route path for this destination.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Login => "/login",
            Self::Home => "/dashboard",
        }
    }
}
