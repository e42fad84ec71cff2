use crate::error::{Result, ScoutError};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io::ErrorKind;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;
use tracing::debug;

/// A JSON array of records kept in one file.
///
/// Every write replaces the whole file through a sibling temp file, so a
/// crash mid-write leaves the previous contents intact. A missing or empty
/// file reads as no records.
#[derive(Debug)]
pub struct JsonRecords<T> {
    path: PathBuf,
    // Serializes read-modify-write cycles
    lock: Mutex<()>,
    _records: PhantomData<fn() -> T>,
}

impl<T> JsonRecords<T>
where
    T: Serialize + DeserializeOwned + Send,
{
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
            _records: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn read(&self) -> Result<Vec<T>> {
        let _guard = self.lock.lock().await;
        self.load().await
    }

    /// Load, let `change` edit the records, and save if it reports a change
    pub async fn update<R>(&self, change: impl FnOnce(&mut Vec<T>) -> (bool, R)) -> Result<R> {
        let _guard = self.lock.lock().await;
        let mut records = self.load().await?;
        let (changed, result) = change(&mut records);
        if changed {
            self.save(&records).await?;
        }
        Ok(result)
    }

    /// Write `records` only when the file does not exist yet
    pub async fn seed(&self, records: &[T]) -> Result<bool> {
        let _guard = self.lock.lock().await;
        if tokio::fs::try_exists(&self.path).await? {
            return Ok(false);
        }
        self.save(records).await?;
        Ok(true)
    }

    async fn load(&self) -> Result<Vec<T>> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(json) if json.trim().is_empty() => Ok(Vec::new()),
            Ok(json) => serde_json::from_str(&json)
                .map_err(|e| ScoutError::json(self.path.display().to_string(), e)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(e.into()),
        }
    }

    async fn save(&self, records: &[T]) -> Result<()> {
        let json = serde_json::to_string_pretty(records)
            .map_err(|e| ScoutError::json(self.path.display().to_string(), e))?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, json).await?;
        tokio::fs::rename(&tmp, &self.path).await?;
        debug!("💾 Saved {} records to {:?}", records.len(), self.path);
        Ok(())
    }
}
