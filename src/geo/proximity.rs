use tracing::{debug, warn};

use crate::geo::lookup::LookupOutcome;
use crate::models::{Coordinates, Listing};

const EARTH_RADIUS_KM: f64 = 6371.0;

/// Default search radius around the user
pub const DEFAULT_RADIUS_KM: f64 = 5.0;

/// Great-circle distance between two points
pub fn haversine_km(a: Coordinates, b: Coordinates) -> f64 {
    let (lat1, lat2) = (a.lat.to_radians(), b.lat.to_radians());
    let dlat = (b.lat - a.lat).to_radians();
    let dlng = (b.lng - a.lng).to_radians();

    let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlng / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_KM * h.sqrt().min(1.0).asin()
}

/// Radius filter around a located user
#[derive(Debug, Clone)]
pub struct Proximity {
    pub radius_km: f64,
    /// Region names that count as nearby for listings without coordinates
    pub fallback_regions: Vec<String>,
}

impl Default for Proximity {
    fn default() -> Self {
        Self {
            radius_km: DEFAULT_RADIUS_KM,
            fallback_regions: Vec::new(),
        }
    }
}

impl Proximity {
    pub fn new(radius_km: f64, fallback_regions: Vec<String>) -> Self {
        Self {
            radius_km,
            fallback_regions,
        }
    }

    fn is_near(&self, listing: &Listing, origin: Coordinates) -> bool {
        match listing.coordinates {
            Some(coordinates) => haversine_km(origin, coordinates) <= self.radius_km,
            None => self
                .fallback_regions
                .iter()
                .any(|region| listing.location.contains(region.as_str())),
        }
    }

    /// Listings near the lookup's position. Without a position the
    /// result is the unfiltered list in source order.
    pub fn nearby<'a>(
        &self,
        listings: &'a [Listing],
        outcome: &LookupOutcome,
    ) -> Vec<&'a Listing> {
        match outcome {
            LookupOutcome::Located(origin) => {
                let near: Vec<&Listing> = listings
                    .iter()
                    .filter(|l| self.is_near(l, *origin))
                    .collect();
                debug!(
                    "{} of {} listings within {} km",
                    near.len(),
                    listings.len(),
                    self.radius_km
                );
                near
            }
            LookupOutcome::Failed(err) => {
                warn!("No position ({}), showing all listings", err);
                listings.iter().collect()
            }
            LookupOutcome::Cancelled => listings.iter().collect(),
        }
    }
}

/// `Proximity::nearby` without fallback regions
pub fn nearby<'a>(
    listings: &'a [Listing],
    outcome: &LookupOutcome,
    radius_km: f64,
) -> Vec<&'a Listing> {
    Proximity::new(radius_km, Vec::new()).nearby(listings, outcome)
}
