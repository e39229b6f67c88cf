//! User profile types.

use serde::{Deserialize, Serialize};

/// The authenticated user's profile as held in memory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Login name, always present.
    pub username: String,
    /// Authorization role, if the service assigned one.
    #[serde(default)]
    pub role: Option<String>,
    /// Contact email. Held in memory only, never persisted.
    #[serde(default)]
    pub email: Option<String>,
    /// Project codenames assigned to the user, in service order.
    #[serde(default)]
    pub codenames: Vec<String>,
}

impl UserProfile {
    /// Creates a provisional profile carrying only the username, as set
    /// by `login` before the first profile refresh completes.
    #[must_use]
    pub fn provisional(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            role: None,
            email: None,
            codenames: Vec::new(),
        }
    }

    /// Returns true if the user carries the administrator role.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role
            .as_deref()
            .is_some_and(|r| r.eq_ignore_ascii_case("admin"))
    }
}

/// A normalized profile as returned by the identity gateway.
///
/// The gateway accepts either an explicit codename list or a `projects`
/// list whose entries carry a codename; [`ProfileRecord::codenames`] is
/// the normalized form (list order kept, duplicates preserved).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileRecord {
    /// Login name echoed by the profile endpoint.
    pub username: String,
    /// Authorization role, if assigned.
    pub role: Option<String>,
    /// Contact email, if known.
    pub email: Option<String>,
    /// Normalized codename list.
    pub codenames: Vec<String>,
}

impl ProfileRecord {
    /// Normalizes the two profile payload shapes into one codename
    /// list: an explicit list wins; otherwise the `projects` entries
    /// are projected in order.
    #[must_use]
    pub fn normalize_codenames(
        explicit: Option<Vec<String>>,
        projects: Option<Vec<String>>,
    ) -> Vec<String> {
        explicit.or(projects).unwrap_or_default()
    }
}
