//! Persisted session snapshot types.
//!
//! Two logical entries survive a restart: the raw credential and a
//! denormalized user snapshot. The email field is deliberately absent
//! from the snapshot.

use serde::{Deserialize, Serialize};

use crate::user::UserProfile;

/// The logical keys the session store operates on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreKey {
    /// The raw bearer credential.
    Token,
    /// The persisted user snapshot (JSON).
    User,
}

impl StoreKey {
    /// Returns the stable storage name for this key.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Token => "auth_token",
            Self::User => "auth_user",
        }
    }
}

/// The user snapshot written to the session store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedUser {
    /// Login name.
    pub username: String,
    /// Authorization role, if assigned.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// Project codenames, in service order.
    #[serde(default)]
    pub codenames: Vec<String>,
}

impl PersistedUser {
    /// Restores an in-memory profile from the snapshot. The email is
    /// not persisted and comes back only from a profile refresh.
    #[must_use]
    pub fn into_profile(self) -> UserProfile {
        UserProfile {
            username: self.username,
            role: self.role,
            email: None,
            codenames: self.codenames,
        }
    }
}

impl From<&UserProfile> for PersistedUser {
    fn from(user: &UserProfile) -> Self {
        Self {
            username: user.username.clone(),
            role: user.role.clone(),
            codenames: user.codenames.clone(),
        }
    }
}
