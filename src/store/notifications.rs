use crate::error::{Result, ScoutError};
use crate::models::notification::{mark_all_read, mark_read, unread_count};
use crate::models::Notification;
use crate::store::records::JsonRecords;
use async_trait::async_trait;
use std::path::PathBuf;
use tokio::sync::RwLock;

/// Read/write contract for the notification feed.
///
/// `mark_read` and `delete` fail with `NotFound` for an unknown id.
#[async_trait]
pub trait NotificationStore: Send + Sync {
    async fn list(&self) -> Result<Vec<Notification>>;

    async fn unread_count(&self) -> Result<usize> {
        Ok(unread_count(&self.list().await?))
    }

    async fn mark_read(&self, id: u32) -> Result<()>;

    /// Returns how many were unread
    async fn mark_all_read(&self) -> Result<usize>;

    async fn delete(&self, id: u32) -> Result<()>;
}

fn mark_one(notifications: &mut [Notification], id: u32) -> Result<()> {
    if mark_read(notifications, id) {
        Ok(())
    } else {
        Err(ScoutError::not_found("notification", id))
    }
}

fn delete_one(notifications: &mut Vec<Notification>, id: u32) -> Result<()> {
    let before = notifications.len();
    notifications.retain(|n| n.id != id);
    if notifications.len() == before {
        return Err(ScoutError::not_found("notification", id));
    }
    Ok(())
}

#[derive(Debug, Default)]
pub struct MemoryNotificationStore {
    notifications: RwLock<Vec<Notification>>,
}

impl MemoryNotificationStore {
    pub fn new(notifications: Vec<Notification>) -> Self {
        Self {
            notifications: RwLock::new(notifications),
        }
    }
}

#[async_trait]
impl NotificationStore for MemoryNotificationStore {
    async fn list(&self) -> Result<Vec<Notification>> {
        Ok(self.notifications.read().await.clone())
    }

    async fn mark_read(&self, id: u32) -> Result<()> {
        mark_one(&mut self.notifications.write().await, id)
    }

    async fn mark_all_read(&self) -> Result<usize> {
        Ok(mark_all_read(&mut self.notifications.write().await))
    }

    async fn delete(&self, id: u32) -> Result<()> {
        delete_one(&mut *self.notifications.write().await, id)
    }
}

/// Notification feed persisted as a JSON array
#[derive(Debug)]
pub struct JsonNotificationStore {
    records: JsonRecords<Notification>,
}

impl JsonNotificationStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            records: JsonRecords::new(path),
        }
    }

    pub async fn seed(&self, notifications: &[Notification]) -> Result<bool> {
        self.records.seed(notifications).await
    }
}

#[async_trait]
impl NotificationStore for JsonNotificationStore {
    async fn list(&self) -> Result<Vec<Notification>> {
        self.records.read().await
    }

    async fn mark_read(&self, id: u32) -> Result<()> {
        self.records
            .update(|notifications| {
                let marked = mark_one(notifications, id);
                (marked.is_ok(), marked)
            })
            .await?
    }

    async fn mark_all_read(&self) -> Result<usize> {
        self.records
            .update(|notifications| {
                let changed = mark_all_read(notifications);
                (changed > 0, changed)
            })
            .await
    }

    async fn delete(&self, id: u32) -> Result<()> {
        self.records
            .update(|notifications| {
                let deleted = delete_one(notifications, id);
                (deleted.is_ok(), deleted)
            })
            .await?
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::MockCatalog;

    #[tokio::test]
    async fn test_mark_read_and_delete() {
        let store = MemoryNotificationStore::new(MockCatalog::notifications());
        assert_eq!(store.unread_count().await.unwrap(), 2);

        store.mark_read(1).await.unwrap();
        assert_eq!(store.unread_count().await.unwrap(), 1);

        store.delete(2).await.unwrap();
        assert_eq!(store.unread_count().await.unwrap(), 0);
        assert_eq!(store.list().await.unwrap().len(), 5);
    }

    #[tokio::test]
    async fn test_unknown_id_is_not_found() {
        let store = MemoryNotificationStore::new(MockCatalog::notifications());
        assert!(matches!(
            store.mark_read(99).await.unwrap_err(),
            ScoutError::NotFound { id: 99, .. }
        ));
        assert!(matches!(
            store.delete(99).await.unwrap_err(),
            ScoutError::NotFound { id: 99, .. }
        ));
    }

    #[tokio::test]
    async fn test_json_store_mark_all_read_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notifications.json");

        let store = JsonNotificationStore::new(&path);
        store.seed(&MockCatalog::notifications()).await.unwrap();
        assert_eq!(store.mark_all_read().await.unwrap(), 2);
        assert_eq!(store.mark_all_read().await.unwrap(), 0);
        drop(store);

        let reopened = JsonNotificationStore::new(&path);
        assert_eq!(reopened.unread_count().await.unwrap(), 0);
        assert_eq!(reopened.list().await.unwrap().len(), 6);
    }
}
