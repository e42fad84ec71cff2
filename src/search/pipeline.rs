use std::cmp::Ordering;
use std::collections::BTreeSet;
use tracing::debug;

use crate::models::{Coordinates, Listing};
use crate::search::distance::DistanceScale;
use crate::search::types::{CategoryFilter, Criteria, SortMode};

/// Whether a single listing passes every filter in `criteria`
pub fn matches(listing: &Listing, criteria: &Criteria) -> bool {
    matches_query(listing, &criteria.query)
        && criteria.property_type.accepts(&listing.property_type)
        && criteria.price_range.contains(listing.price)
        && matches_category(listing, criteria.category)
        && has_amenities(listing, &criteria.amenities)
        && (!criteria.only_available || listing.available)
}

fn matches_query(listing: &Listing, query: &str) -> bool {
    let query = query.trim();
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    listing.title.to_lowercase().contains(&needle)
        || listing.location.to_lowercase().contains(&needle)
}

fn matches_category(listing: &Listing, category: Option<CategoryFilter>) -> bool {
    match category {
        None => true,
        Some(CategoryFilter::Student) => listing.student_friendly(),
        Some(CategoryFilter::Family) => listing.family_friendly(),
    }
}

fn has_amenities(listing: &Listing, wanted: &BTreeSet<String>) -> bool {
    wanted.iter().all(|tag| {
        listing
            .amenities
            .iter()
            .any(|have| have.trim().eq_ignore_ascii_case(tag))
    })
}

/// Listings passing `criteria`, in source order
pub fn filter<'a>(listings: &'a [Listing], criteria: &Criteria) -> Vec<&'a Listing> {
    listings.iter().filter(|l| matches(l, criteria)).collect()
}

/// Stable in-place sort of a result set
pub fn sort<'a>(results: &mut [&'a Listing], mode: SortMode, origin: Option<Coordinates>) {
    match mode {
        SortMode::PriceAsc => results.sort_by(|a, b| a.price.total_cmp(&b.price)),
        SortMode::PriceDesc => results.sort_by(|a, b| b.price.total_cmp(&a.price)),
        SortMode::RatingDesc => results.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
        SortMode::DistanceAsc => {
            let scale = DistanceScale::for_results(results, origin);
            let mut keyed: Vec<(Option<f64>, &'a Listing)> =
                results.iter().map(|l| (scale.key(l), *l)).collect();
            // Keyless listings go last
            keyed.sort_by(|(ka, _), (kb, _)| match (ka, kb) {
                (Some(ka), Some(kb)) => ka.total_cmp(kb),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            });
            for (slot, (_, listing)) in results.iter_mut().zip(keyed) {
                *slot = listing;
            }
        }
    }
}

/// Filter then order `listings`. The source slice is never touched.
pub fn filter_and_sort<'a>(listings: &'a [Listing], criteria: &Criteria) -> Vec<&'a Listing> {
    let mut results = filter(listings, criteria);
    if let Some(mode) = criteria.sort {
        sort(&mut results, mode, criteria.origin);
    }
    debug!(
        "Search kept {} of {} listings (sort: {:?})",
        results.len(),
        listings.len(),
        criteria.sort
    );
    results
}

/// Result of one search, ready for display
#[derive(Debug, Clone)]
pub struct SearchOutcome<'a> {
    pub listings: Vec<&'a Listing>,
    pub total: usize,
}

impl<'a> SearchOutcome<'a> {
    pub fn run(listings: &'a [Listing], criteria: &Criteria) -> Self {
        Self {
            listings: filter_and_sort(listings, criteria),
            total: listings.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn summary(&self) -> String {
        if self.is_empty() {
            "No listings match your criteria".to_string()
        } else {
            format!("{} listing(s) found", self.listings.len())
        }
    }
}
