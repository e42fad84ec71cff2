use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};
use std::fmt;
use std::str::FromStr;

use crate::error::{Result, ScoutError};

pub mod contract;
pub mod notification;

pub use contract::{Contract, ContractDraft, ContractStats, ContractStatus, Party, PaymentStatus};
pub use notification::{Notification, NotificationKind};

/// Billing period attached to a listing price
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum PriceType {
    #[serde(alias = "jour")]
    Day,
    #[serde(alias = "semaine")]
    Week,
    #[default]
    #[serde(alias = "mois")]
    Month,
    #[serde(alias = "an", alias = "année", alias = "annee")]
    Year,
}

impl fmt::Display for PriceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PriceType::Day => "day",
            PriceType::Week => "week",
            PriceType::Month => "month",
            PriceType::Year => "year",
        };
        f.write_str(label)
    }
}

/// Kind of property. Unknown kinds are kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PropertyType {
    Studio,
    Apartment,
    Villa,
    House,
    Room,
    Other(String),
}

impl PropertyType {
    pub fn as_str(&self) -> &str {
        match self {
            PropertyType::Studio => "studio",
            PropertyType::Apartment => "apartment",
            PropertyType::Villa => "villa",
            PropertyType::House => "house",
            PropertyType::Room => "room",
            PropertyType::Other(kind) => kind,
        }
    }
}

impl From<String> for PropertyType {
    fn from(value: String) -> Self {
        let kind = value.trim().to_lowercase();
        match kind.as_str() {
            "studio" => PropertyType::Studio,
            "apartment" | "appartement" => PropertyType::Apartment,
            "villa" => PropertyType::Villa,
            "house" | "maison" => PropertyType::House,
            "room" | "chambre" => PropertyType::Room,
            _ => PropertyType::Other(kind),
        }
    }
}

impl From<PropertyType> for String {
    fn from(value: PropertyType) -> Self {
        value.as_str().to_string()
    }
}

impl FromStr for PropertyType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(PropertyType::from(s.to_string()))
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Geographic position in decimal degrees
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

impl FromStr for Coordinates {
    type Err = ScoutError;

    /// Parses `"lat,lng"`
    fn from_str(s: &str) -> Result<Self> {
        let (lat, lng) = s
            .split_once(',')
            .ok_or_else(|| ScoutError::invalid_coordinates(s, "expected LAT,LNG"))?;
        let lat: f64 = lat
            .trim()
            .parse()
            .map_err(|_| ScoutError::invalid_coordinates(s, "latitude is not a number"))?;
        let lng: f64 = lng
            .trim()
            .parse()
            .map_err(|_| ScoutError::invalid_coordinates(s, "longitude is not a number"))?;

        if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lng) {
            return Err(ScoutError::invalid_coordinates(s, "out of range"));
        }

        Ok(Self { lat, lng })
    }
}

/// A rentable property record shown in search results
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub id: u32,
    pub title: String,
    pub price: f64,
    #[serde(default)]
    pub price_type: PriceType,
    pub location: String,
    /// Free-text proximity hint, e.g. "200m de l'INSAT"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<String>,
    #[serde(rename = "type")]
    pub property_type: PropertyType,
    #[serde(default)]
    pub amenities: BTreeSet<String>,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub reviews: u32,
    #[serde(default = "default_available")]
    pub available: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_student_friendly: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_family_friendly: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
}

fn default_available() -> bool {
    true
}

impl Listing {
    pub fn student_friendly(&self) -> bool {
        self.is_student_friendly.unwrap_or(false)
    }

    pub fn family_friendly(&self) -> bool {
        self.is_family_friendly.unwrap_or(false)
    }

    /// Check the record-level invariants a provider must uphold
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(ScoutError::invalid_listing(self.id, "title is empty"));
        }
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(ScoutError::invalid_listing(
                self.id,
                format!("price {} is not a non-negative amount", self.price),
            ));
        }
        if !(0.0..=5.0).contains(&self.rating) {
            return Err(ScoutError::invalid_listing(
                self.id,
                format!("rating {} is outside 0..=5", self.rating),
            ));
        }
        Ok(())
    }
}

/// Validate every listing and reject duplicate ids
pub fn validate_all(listings: &[Listing]) -> Result<()> {
    let mut seen = HashSet::with_capacity(listings.len());
    for listing in listings {
        listing.validate()?;
        if !seen.insert(listing.id) {
            return Err(ScoutError::DuplicateId { id: listing.id });
        }
    }
    Ok(())
}

/// A listing the user saved
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Favorite {
    pub listing_id: u32,
    pub added_on: NaiveDate,
}
