//! Warden Application - Session lifecycle core
//!
//! This crate owns the session state machine, the invalidation watcher
//! and the route guard, behind ports implemented by the infrastructure
//! layer.

pub mod manager;
pub mod ports;
pub mod route_guard;
pub mod watcher;

#[cfg(test)]
mod test_support;

pub use manager::{SessionManager, SessionPhase};
pub use route_guard::{RouteDecision, decide};
pub use watcher::InvalidationWatcher;
