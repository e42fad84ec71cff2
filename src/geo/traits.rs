use crate::models::Coordinates;
use async_trait::async_trait;
use thiserror::Error;

/// Why a position could not be obtained
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeoError {
    #[error("location permission denied")]
    PermissionDenied,

    #[error("position unavailable: {0}")]
    Unavailable(String),

    #[error("location lookup timed out")]
    Timeout,
}

/// Source of the user's current position.
/// Implementations answer once per call; retries are the caller's choice.
#[async_trait]
pub trait GeolocationProvider: Send + Sync {
    async fn current_position(&self) -> Result<Coordinates, GeoError>;

    fn provider_name(&self) -> &'static str;
}

/// Always answers with the same position
#[derive(Debug, Clone, Copy)]
pub struct FixedLocation(pub Coordinates);

#[async_trait]
impl GeolocationProvider for FixedLocation {
    async fn current_position(&self) -> Result<Coordinates, GeoError> {
        Ok(self.0)
    }

    fn provider_name(&self) -> &'static str {
        "fixed"
    }
}

/// Behaves like a user who refused the permission prompt
#[derive(Debug, Clone, Copy, Default)]
pub struct DeniedLocation;

#[async_trait]
impl GeolocationProvider for DeniedLocation {
    async fn current_position(&self) -> Result<Coordinates, GeoError> {
        Err(GeoError::PermissionDenied)
    }

    fn provider_name(&self) -> &'static str {
        "denied"
    }
}
