//! Rental listing search: a filter/sort pipeline over typed listings,
//! a favorites store and a geolocation-backed proximity filter.

pub mod config;
pub mod error;
pub mod geo;
pub mod models;
pub mod providers;
pub mod search;
pub mod store;

pub use error::{Result, ScoutError};
pub use models::{
    Contract, ContractStatus, Coordinates, Favorite, Listing, Notification, PriceType, PropertyType,
};
pub use search::{filter_and_sort, Criteria, SearchOutcome, SortMode};
