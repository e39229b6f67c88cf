//! Port definitions (interfaces)
//!
//! Ports define the boundaries between the session core and external
//! systems. Each port is a trait implemented by adapters in the
//! infrastructure layer.

mod identity_gateway;
mod navigator;
mod notifier;
mod observer;
mod session_store;

pub use identity_gateway::IdentityGateway;
pub use navigator::Navigator;
pub use notifier::InvalidationNotifier;
pub use observer::ResponseObserver;
pub use session_store::SessionStore;
