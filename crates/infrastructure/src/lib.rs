//! Warden Infrastructure - Adapters
//!
//! Adapters implementing the application-layer ports: the reqwest
//! identity gateway, the session stores, the response pipeline and the
//! channel-based navigation/notification shims.

pub mod credential;
pub mod gateway;
pub mod navigation;
pub mod pipeline;
pub mod store;

pub use credential::BearerSlot;
pub use gateway::{GatewayBuildError, HttpIdentityGateway};
pub use navigation::{AutoAckNotifier, ChannelNavigator, NavigationEvent};
pub use pipeline::{ApiResponse, PipelineError, ResponsePipeline};
pub use store::{FileSessionStore, MemorySessionStore, NullSessionStore};
