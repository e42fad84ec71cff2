use crate::error::Result;
use crate::models::Favorite;
use crate::store::records::JsonRecords;
use crate::store::traits::{insert_favorite, remove_favorite, FavoritesStore};
use async_trait::async_trait;
use chrono::NaiveDate;
use std::path::{Path, PathBuf};

/// Favorites persisted as a pretty-printed JSON array
#[derive(Debug)]
pub struct JsonFileStore {
    records: JsonRecords<Favorite>,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            records: JsonRecords::new(path),
        }
    }

    pub fn path(&self) -> &Path {
        self.records.path()
    }
}

#[async_trait]
impl FavoritesStore for JsonFileStore {
    async fn list(&self) -> Result<Vec<Favorite>> {
        self.records.read().await
    }

    async fn add(&self, listing_id: u32, added_on: NaiveDate) -> Result<bool> {
        self.records
            .update(|favorites| {
                let inserted = insert_favorite(favorites, listing_id, added_on);
                (inserted, inserted)
            })
            .await
    }

    async fn remove(&self, listing_id: u32) -> Result<bool> {
        self.records
            .update(|favorites| {
                let removed = remove_favorite(favorites, listing_id);
                (removed, removed)
            })
            .await
    }

    async fn clear(&self) -> Result<()> {
        self.records
            .update(|favorites| {
                favorites.clear();
                (true, ())
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ScoutError;

    #[tokio::test]
    async fn test_missing_file_reads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("favorites.json"));
        assert!(store.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_favorites_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("favorites.json");
        let added_on = NaiveDate::from_ymd_opt(2024, 1, 12).unwrap();

        let store = JsonFileStore::new(&path);
        store.add(2, added_on).await.unwrap();
        store.add(1, added_on).await.unwrap();
        store.remove(2).await.unwrap();
        drop(store);

        let reopened = JsonFileStore::new(&path);
        let favorites = reopened.list().await.unwrap();
        assert_eq!(
            favorites,
            vec![Favorite {
                listing_id: 1,
                added_on
            }]
        );
        assert!(!dir.path().join("nested").join("favorites.json.tmp").exists());
    }

    #[tokio::test]
    async fn test_corrupt_file_is_json_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("favorites.json");
        std::fs::write(&path, "{not json").unwrap();

        let err = JsonFileStore::new(&path).list().await.unwrap_err();
        assert!(matches!(err, ScoutError::Json { .. }));
    }
}
