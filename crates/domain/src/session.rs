//! The in-memory session entity.

use serde::{Deserialize, Serialize};

use crate::user::UserProfile;

/// One client's view of an authenticated session: bearer credential,
/// user profile and the globally selected project codename.
///
/// The session is authenticated iff both `token` and `user` are
/// present; the two change together outside the narrow window where
/// `login`/`initialize_auth` install a provisional user. The selected
/// codename, when present, is always a member of `user.codenames`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Opaque bearer credential, if one is installed.
    pub token: Option<String>,
    /// The authenticated user's profile, if known.
    pub user: Option<UserProfile>,
    /// The codename scoping subsequent requests, if one is selected.
    pub selected_codename: Option<String>,
}

impl Session {
    /// Creates an empty, unauthenticated session.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            token: None,
            user: None,
            selected_codename: None,
        }
    }

    /// Returns true if both credential and user profile are present.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.token.is_some() && self.user.is_some()
    }

    /// Returns the codenames available to the current user.
    #[must_use]
    pub fn available_codenames(&self) -> &[String] {
        match &self.user {
            Some(user) => user.codenames.as_slice(),
            None => &[],
        }
    }

    /// Returns true if the current user carries the administrator role.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(UserProfile::is_admin)
    }

    /// Resets the session to its empty state in place.
    pub fn clear(&mut self) {
        self.token = None;
        self.user = None;
        self.selected_codename = None;
    }

    /// Replaces the user's codename list and re-applies the selection
    /// policy: a still-valid selection is kept; otherwise the first
    /// codename is selected; an empty list clears the selection.
    ///
    /// A user with zero assigned codenames is a legitimate state, not
    /// an error.
    pub fn apply_codenames(&mut self, codenames: Vec<String>) {
        // No user, no selection: a codename is only ever selected on
        // behalf of a present user.
        let Some(user) = self.user.as_mut() else {
            self.selected_codename = None;
            return;
        };

        let keep = self
            .selected_codename
            .as_ref()
            .is_some_and(|current| codenames.contains(current));

        if !keep {
            self.selected_codename = codenames.first().cloned();
        }

        user.codenames = codenames;
    }
}
