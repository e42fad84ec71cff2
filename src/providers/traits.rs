use crate::error::Result;
use crate::models::Listing;
use async_trait::async_trait;

/// Common trait for all listing sources.
/// New backends (a real API, a database) plug in here.
#[async_trait]
pub trait ListingProvider: Send + Sync {
    /// Load and validate the full listing set
    async fn listings(&self) -> Result<Vec<Listing>>;

    /// Get the name of the listing source
    fn source_name(&self) -> &'static str;
}
