//! Response observation port

use async_trait::async_trait;
use warden_domain::AuthOutcome;

/// Port for the response pipeline's single hook point.
///
/// The pipeline reduces every inbound response to an [`AuthOutcome`]
/// with one strict extraction function and hands it to the registered
/// observer. Implementations must return promptly; long-running
/// handling is spawned off the hook.
#[async_trait]
pub trait ResponseObserver: Send + Sync {
    /// Called once per inbound API response, success or error.
    async fn on_response(&self, outcome: AuthOutcome);
}
