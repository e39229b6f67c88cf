//! Warden session manager - demo entry point.
//!
//! Wires the session core against a real identity service: restores a
//! persisted session, optionally performs a fresh login from the
//! environment, routes one API call through the response pipeline and
//! prints the navigation events the core emits.

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use warden_application::{InvalidationWatcher, SessionManager};
use warden_infrastructure::{
    AutoAckNotifier, BearerSlot, ChannelNavigator, FileSessionStore, HttpIdentityGateway,
    ResponsePipeline,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let base_url =
        std::env::var("WARDEN_BASE_URL").unwrap_or_else(|_| "http://localhost:8000/".to_string());
    let state_dir = std::env::var("WARDEN_STATE_DIR").unwrap_or_else(|_| ".warden".to_string());

    let store = FileSessionStore::new(&state_dir);
    let bearer = BearerSlot::new();
    let gateway = HttpIdentityGateway::with_slot(&base_url, bearer.clone())?;
    let (navigator, mut nav_events) = ChannelNavigator::new();

    let watcher = InvalidationWatcher::new(store.clone(), navigator.clone(), AutoAckNotifier);
    let pipeline = ResponsePipeline::with_default_client(bearer, Arc::new(watcher));
    let manager = Arc::new(SessionManager::new(gateway, store, navigator));

    manager.initialize_auth().await;

    if !manager.is_authenticated().await
        && let (Ok(username), Ok(password)) = (
            std::env::var("WARDEN_USERNAME"),
            std::env::var("WARDEN_PASSWORD"),
        )
    {
        match manager.login(&username, &password).await {
            Ok(()) => tracing::info!(%username, "login succeeded"),
            Err(err) => tracing::error!(%username, error = %err, "login failed"),
        }
    }

    let session = manager.session().await;
    tracing::info!(
        authenticated = session.is_authenticated(),
        admin = session.is_admin(),
        selected = session.selected_codename.as_deref().unwrap_or("-"),
        codenames = session.available_codenames().len(),
        "session state"
    );

    // Optional: exercise an authenticated endpoint through the
    // pipeline so invalidation signals reach the watcher.
    if let Ok(ping_path) = std::env::var("WARDEN_PING_PATH") {
        let url = url::Url::parse(&base_url)?.join(&ping_path)?;
        match pipeline.get(url).await {
            Ok(response) => tracing::info!(status = response.status, "ping response"),
            Err(err) => tracing::warn!(error = %err, "ping failed"),
        }
    }

    while let Ok(event) = nav_events.try_recv() {
        tracing::info!(?event, "navigation requested");
    }

    Ok(())
}
