//! Warden Domain - Core session types
//!
//! This crate defines the domain model for the Warden session manager.
//! All types here are pure Rust with no I/O dependencies.

pub mod error;
pub mod navigation;
pub mod outcome;
pub mod persistence;
pub mod session;
pub mod user;

pub use error::{AuthError, AuthResult};
pub use navigation::NavTarget;
pub use outcome::AuthOutcome;
pub use persistence::{PersistedUser, StoreKey};
pub use session::Session;
pub use user::{ProfileRecord, UserProfile};
