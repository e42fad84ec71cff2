use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::models::{Coordinates, PropertyType};

/// Upper bound of the price slider in the listing UI
pub const DEFAULT_MAX_PRICE: f64 = 2000.0;

/// Inclusive price bounds
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

impl PriceRange {
    /// Reversed bounds are swapped
    pub fn new(min: f64, max: f64) -> Self {
        if min > max {
            Self { min: max, max: min }
        } else {
            Self { min, max }
        }
    }

    pub fn any() -> Self {
        Self {
            min: f64::NEG_INFINITY,
            max: f64::INFINITY,
        }
    }

    pub fn contains(&self, price: f64) -> bool {
        self.min <= price && price <= self.max
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        Self::new(0.0, DEFAULT_MAX_PRICE)
    }
}

/// Property type filter; `All` disables it
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TypeFilter {
    #[default]
    All,
    Only(PropertyType),
}

impl TypeFilter {
    pub fn accepts(&self, kind: &PropertyType) -> bool {
        match self {
            TypeFilter::All => true,
            TypeFilter::Only(wanted) => wanted == kind,
        }
    }
}

impl FromStr for TypeFilter {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() || s.eq_ignore_ascii_case("all") {
            Ok(TypeFilter::All)
        } else {
            Ok(TypeFilter::Only(PropertyType::from(s.to_string())))
        }
    }
}

/// Coarse audience tag mapped onto the listing's boolean flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryFilter {
    Student,
    Family,
}

impl CategoryFilter {
    /// `""` parses to `None`
    pub fn parse_optional(s: &str) -> Result<Option<Self>, String> {
        match s.trim().to_lowercase().as_str() {
            "" => Ok(None),
            "student" => Ok(Some(CategoryFilter::Student)),
            "family" => Ok(Some(CategoryFilter::Family)),
            other => Err(format!("unknown category '{}'", other)),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_optional(s)?.ok_or_else(|| "category is empty".to_string())
    }
}

/// Result ordering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortMode {
    PriceAsc,
    PriceDesc,
    RatingDesc,
    DistanceAsc,
}

impl SortMode {
    /// `""` parses to `None`, which keeps source order
    pub fn parse_optional(s: &str) -> Result<Option<Self>, String> {
        if s.trim().is_empty() {
            Ok(None)
        } else {
            s.parse().map(Some)
        }
    }
}

impl FromStr for SortMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "" => Err("sort mode is empty".to_string()),
            "price" | "price-asc" => Ok(SortMode::PriceAsc),
            "price-desc" => Ok(SortMode::PriceDesc),
            "rating" => Ok(SortMode::RatingDesc),
            "distance" => Ok(SortMode::DistanceAsc),
            other => Err(format!("unknown sort mode '{}'", other)),
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SortMode::PriceAsc => "price",
            SortMode::PriceDesc => "price-desc",
            SortMode::RatingDesc => "rating",
            SortMode::DistanceAsc => "distance",
        };
        f.write_str(label)
    }
}

/// The combined filter and sort parameters of one search
#[derive(Debug, Clone, Default)]
pub struct Criteria {
    /// Case-insensitive substring of title or location
    pub query: String,
    pub property_type: TypeFilter,
    pub price_range: PriceRange,
    pub category: Option<CategoryFilter>,
    /// Tags a listing must all carry, lowercase
    pub amenities: BTreeSet<String>,
    /// `None` keeps source order
    pub sort: Option<SortMode>,
    /// Hide listings marked unavailable
    pub only_available: bool,
    /// Reference point for distance sorting
    pub origin: Option<Coordinates>,
}

impl Criteria {
    /// Criteria that match every listing
    pub fn match_all() -> Self {
        Self {
            price_range: PriceRange::any(),
            ..Self::default()
        }
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub fn with_type(mut self, property_type: TypeFilter) -> Self {
        self.property_type = property_type;
        self
    }

    pub fn with_price_range(mut self, min: f64, max: f64) -> Self {
        self.price_range = PriceRange::new(min, max);
        self
    }

    pub fn with_category(mut self, category: Option<CategoryFilter>) -> Self {
        self.category = category;
        self
    }

    /// Require a tag. Tags are compared case-insensitively.
    pub fn with_amenity(mut self, amenity: &str) -> Self {
        let tag = amenity.trim().to_lowercase();
        if !tag.is_empty() {
            self.amenities.insert(tag);
        }
        self
    }

    pub fn with_sort(mut self, sort: SortMode) -> Self {
        self.sort = Some(sort);
        self
    }

    pub fn with_origin(mut self, origin: Option<Coordinates>) -> Self {
        self.origin = origin;
        self
    }

    pub fn only_available(mut self, only_available: bool) -> Self {
        self.only_available = only_available;
        self
    }
}
