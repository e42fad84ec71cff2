pub mod contracts;
pub mod file;
pub mod memory;
pub mod notifications;
pub mod records;
pub mod traits;

pub use contracts::{ContractStore, JsonContractStore, MemoryContractStore};
pub use file::JsonFileStore;
pub use memory::MemoryStore;
pub use notifications::{JsonNotificationStore, MemoryNotificationStore, NotificationStore};
pub use records::JsonRecords;
pub use traits::FavoritesStore;

use crate::models::{Favorite, Listing};

/// Resolve favorites to catalog entries, in favorite order.
/// Ids that are no longer in the catalog are skipped.
pub fn favorite_listings<'a>(
    listings: &'a [Listing],
    favorites: &[Favorite],
) -> Vec<&'a Listing> {
    favorites
        .iter()
        .filter_map(|f| listings.iter().find(|l| l.id == f.listing_id))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::MockCatalog;
    use chrono::NaiveDate;

    #[test]
    fn test_favorite_listings_skips_unknown_ids() {
        let listings = MockCatalog::catalog();
        let added_on = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
        let favorites: Vec<Favorite> = [3, 99, 1]
            .into_iter()
            .map(|listing_id| Favorite {
                listing_id,
                added_on,
            })
            .collect();

        let ids: Vec<u32> = favorite_listings(&listings, &favorites)
            .iter()
            .map(|l| l.id)
            .collect();
        assert_eq!(ids, vec![3, 1]);
    }
}
