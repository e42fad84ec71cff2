use crate::error::Result;
use crate::models::Favorite;
use async_trait::async_trait;
use chrono::NaiveDate;

/// Read/write contract for a user's saved listings.
///
/// `list` returns favorites in the order they were added. `add` is
/// idempotent and reports whether anything changed, as does `remove`.
#[async_trait]
pub trait FavoritesStore: Send + Sync {
    async fn list(&self) -> Result<Vec<Favorite>>;

    async fn contains(&self, listing_id: u32) -> Result<bool> {
        Ok(self.list().await?.iter().any(|f| f.listing_id == listing_id))
    }

    async fn add(&self, listing_id: u32, added_on: NaiveDate) -> Result<bool>;

    async fn remove(&self, listing_id: u32) -> Result<bool>;

    async fn clear(&self) -> Result<()>;
}

/// Push unless present. Shared by the store implementations.
pub(crate) fn insert_favorite(
    favorites: &mut Vec<Favorite>,
    listing_id: u32,
    added_on: NaiveDate,
) -> bool {
    if favorites.iter().any(|f| f.listing_id == listing_id) {
        return false;
    }
    favorites.push(Favorite {
        listing_id,
        added_on,
    });
    true
}

pub(crate) fn remove_favorite(favorites: &mut Vec<Favorite>, listing_id: u32) -> bool {
    let before = favorites.len();
    favorites.retain(|f| f.listing_id != listing_id);
    favorites.len() != before
}
