pub mod contracts;
pub mod distance;
pub mod pipeline;
pub mod types;

pub use contracts::ContractQuery;
pub use pipeline::{filter, filter_and_sort, matches, sort, SearchOutcome};
pub use types::{CategoryFilter, Criteria, PriceRange, SortMode, TypeFilter};
