pub mod lookup;
pub mod proximity;
pub mod traits;

pub use lookup::{LocationLookup, LookupOutcome};
pub use proximity::{haversine_km, nearby, Proximity, DEFAULT_RADIUS_KM};
pub use traits::{DeniedLocation, FixedLocation, GeoError, GeolocationProvider};
