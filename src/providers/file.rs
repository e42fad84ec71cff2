use crate::error::{Result, ScoutError};
use crate::models::{validate_all, Listing};
use crate::providers::traits::ListingProvider;
use async_trait::async_trait;
use std::path::PathBuf;
use tracing::{debug, info};

/// Listings stored as a JSON array on disk
#[derive(Debug, Clone)]
pub struct JsonFileProvider {
    path: PathBuf,
}

impl JsonFileProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

/// Parse and validate a JSON listing array
pub fn parse_listings(json: &str, context: &str) -> Result<Vec<Listing>> {
    let listings: Vec<Listing> =
        serde_json::from_str(json).map_err(|e| ScoutError::json(context, e))?;
    validate_all(&listings)?;
    Ok(listings)
}

#[async_trait]
impl ListingProvider for JsonFileProvider {
    async fn listings(&self) -> Result<Vec<Listing>> {
        debug!("Reading listings from {:?}", self.path);
        let json = tokio::fs::read_to_string(&self.path).await?;
        let listings = parse_listings(&json, &self.path.display().to_string())?;
        info!("Loaded {} listings from {:?}", listings.len(), self.path);
        Ok(listings)
    }

    fn source_name(&self) -> &'static str {
        "file"
    }
}
