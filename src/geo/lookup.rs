use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::geo::traits::{GeoError, GeolocationProvider};
use crate::models::Coordinates;

/// How a location lookup ended
#[derive(Debug, Clone, PartialEq)]
pub enum LookupOutcome {
    Located(Coordinates),
    Failed(GeoError),
    Cancelled,
}

impl LookupOutcome {
    pub fn position(&self) -> Option<Coordinates> {
        match self {
            LookupOutcome::Located(coordinates) => Some(*coordinates),
            _ => None,
        }
    }
}

/// A one-shot position request running in the background.
///
/// The caller keeps working while it resolves and may cancel it at any
/// point. Dropping the handle without awaiting leaves the task to finish
/// on its own.
pub struct LocationLookup {
    handle: JoinHandle<Result<Coordinates, GeoError>>,
}

impl LocationLookup {
    /// Start a lookup on the current tokio runtime
    pub fn spawn(provider: Arc<dyn GeolocationProvider>) -> Self {
        debug!("Requesting position from {}", provider.provider_name());
        let handle = tokio::spawn(async move { provider.current_position().await });
        Self { handle }
    }

    pub fn cancel(&self) {
        self.handle.abort();
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Wait for the lookup to resolve
    pub async fn outcome(self) -> LookupOutcome {
        match self.handle.await {
            Ok(Ok(coordinates)) => {
                info!("📍 Position found: {}, {}", coordinates.lat, coordinates.lng);
                LookupOutcome::Located(coordinates)
            }
            Ok(Err(err)) => {
                warn!("Location lookup failed: {}", err);
                LookupOutcome::Failed(err)
            }
            Err(join_err) if join_err.is_cancelled() => {
                debug!("Location lookup cancelled");
                LookupOutcome::Cancelled
            }
            Err(join_err) => {
                warn!("Location task panicked: {}", join_err);
                LookupOutcome::Failed(GeoError::Unavailable(join_err.to_string()))
            }
        }
    }

    /// Wait at most `limit`. An expired lookup is aborted.
    pub async fn outcome_within(self, limit: Duration) -> LookupOutcome {
        let abort = self.handle.abort_handle();
        match tokio::time::timeout(limit, self.outcome()).await {
            Ok(outcome) => outcome,
            Err(_) => {
                abort.abort();
                warn!("Location lookup timed out after {:?}", limit);
                LookupOutcome::Failed(GeoError::Timeout)
            }
        }
    }
}
