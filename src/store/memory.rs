use crate::error::Result;
use crate::models::Favorite;
use crate::store::traits::{insert_favorite, remove_favorite, FavoritesStore};
use async_trait::async_trait;
use chrono::NaiveDate;
use tokio::sync::RwLock;

/// Favorites that live for the session only
#[derive(Debug, Default)]
pub struct MemoryStore {
    favorites: RwLock<Vec<Favorite>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl FavoritesStore for MemoryStore {
    async fn list(&self) -> Result<Vec<Favorite>> {
        Ok(self.favorites.read().await.clone())
    }

    async fn add(&self, listing_id: u32, added_on: NaiveDate) -> Result<bool> {
        Ok(insert_favorite(&mut *self.favorites.write().await, listing_id, added_on))
    }

    async fn remove(&self, listing_id: u32) -> Result<bool> {
        Ok(remove_favorite(&mut *self.favorites.write().await, listing_id))
    }

    async fn clear(&self) -> Result<()> {
        self.favorites.write().await.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    #[tokio::test]
    async fn test_add_is_idempotent() {
        let store = MemoryStore::new();
        assert!(store.add(1, day(15)).await.unwrap());
        assert!(!store.add(1, day(16)).await.unwrap());

        let favorites = store.list().await.unwrap();
        assert_eq!(favorites.len(), 1);
        assert_eq!(favorites[0].added_on, day(15));
    }

    #[tokio::test]
    async fn test_remove_and_contains() {
        let store = MemoryStore::new();
        store.add(1, day(15)).await.unwrap();
        store.add(3, day(10)).await.unwrap();

        assert!(store.contains(3).await.unwrap());
        assert!(store.remove(3).await.unwrap());
        assert!(!store.remove(3).await.unwrap());
        assert!(!store.contains(3).await.unwrap());

        store.clear().await.unwrap();
        assert!(store.list().await.unwrap().is_empty());
    }
}
