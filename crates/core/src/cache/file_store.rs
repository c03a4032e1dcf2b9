//! File-backed store persisting one JSON document per cache instance.

use std::io;
use std::path::PathBuf;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::cache::store::{CachedFeed, FeedStore, LocalFeedItem};
use crate::error::StoreError;

/// On-disk document. Kept private so the storage format can evolve without
/// touching the store's API.
#[derive(Serialize, Deserialize)]
struct CacheDocument {
    feed: Vec<LocalFeedItem>,
    timestamp: DateTime<Utc>,
}

/// [`FeedStore`] backed by a single JSON file at a configured path.
#[derive(Debug, Clone)]
pub struct FileSystemFeedStore {
    path: PathBuf,
}

impl FileSystemFeedStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Staging sibling of the target path, so the final rename stays on one
    /// filesystem.
    fn staging_path(&self) -> PathBuf {
        let mut name = self.path.clone().into_os_string();
        name.push(".tmp");
        PathBuf::from(name)
    }
}

#[async_trait]
impl FeedStore for FileSystemFeedStore {
    async fn retrieve(&self) -> Result<Option<CachedFeed>, StoreError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(error) if error.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(error) => {
                return Err(StoreError::Retrieval(format!(
                    "failed to read {}: {error}",
                    self.path.display()
                )));
            }
        };

        let document: CacheDocument = serde_json::from_slice(&bytes).map_err(|error| {
            StoreError::Retrieval(format!("failed to decode {}: {error}", self.path.display()))
        })?;

        Ok(Some(CachedFeed { feed: document.feed, timestamp: document.timestamp }))
    }

    async fn insert(&self, feed: Vec<LocalFeedItem>, timestamp: DateTime<Utc>) -> Result<(), StoreError> {
        let document = CacheDocument { feed, timestamp };
        let encoded = serde_json::to_vec(&document)
            .map_err(|error| StoreError::Insertion(format!("failed to encode snapshot: {error}")))?;

        // Stage then rename: a reader never observes a partial document.
        let staging = self.staging_path();
        tokio::fs::write(&staging, &encoded)
            .await
            .map_err(|error| StoreError::Insertion(format!("failed to write {}: {error}", staging.display())))?;
        tokio::fs::rename(&staging, &self.path)
            .await
            .map_err(|error| {
                StoreError::Insertion(format!("failed to replace {}: {error}", self.path.display()))
            })?;

        tracing::debug!("cached {} feed items at {}", document.feed.len(), self.path.display());
        Ok(())
    }

    async fn delete_cached_feed(&self) -> Result<(), StoreError> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            // Deleting nothing is not an error.
            Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(error) => Err(StoreError::Deletion(format!(
                "failed to delete {}: {error}",
                self.path.display()
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::FeedItem;
    use url::Url;
    use uuid::Uuid;

    fn store_in(dir: &tempfile::TempDir) -> FileSystemFeedStore {
        FileSystemFeedStore::new(dir.path().join("feed-cache.json"))
    }

    fn unique_feed() -> Vec<LocalFeedItem> {
        let item = FeedItem {
            id: Uuid::new_v4(),
            description: Some("a description".to_string()),
            location: None,
            image_url: Url::parse("https://a-url.com/image.png").unwrap(),
        };
        vec![LocalFeedItem::from(item)]
    }

    fn timestamp() -> DateTime<Utc> {
        "2026-08-28T10:00:00Z".parse().unwrap()
    }

    #[tokio::test]
    async fn test_retrieve_delivers_empty_on_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        assert_eq!(store.retrieve().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_retrieve_has_no_side_effects_on_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        assert_eq!(store.retrieve().await.unwrap(), None);
        assert_eq!(store.retrieve().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_retrieve_delivers_failure_on_invalid_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("feed-cache.json");
        tokio::fs::write(&path, b"not json at all").await.unwrap();
        let store = FileSystemFeedStore::new(path);

        let result = store.retrieve().await;

        assert!(matches!(result, Err(StoreError::Retrieval(_))));
    }

    #[tokio::test]
    async fn test_retrieve_delivers_failure_on_wrong_shape() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("feed-cache.json");
        tokio::fs::write(&path, br#"{"feed": "not a list"}"#).await.unwrap();
        let store = FileSystemFeedStore::new(path);

        assert!(matches!(store.retrieve().await, Err(StoreError::Retrieval(_))));
    }

    #[tokio::test]
    async fn test_retrieve_after_insert_delivers_inserted_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        let feed = unique_feed();

        store.insert(feed.clone(), timestamp()).await.unwrap();

        let cached = store.retrieve().await.unwrap().unwrap();
        assert_eq!(cached.feed, feed);
        assert_eq!(cached.timestamp, timestamp());
    }

    #[tokio::test]
    async fn test_retrieve_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        store.insert(unique_feed(), timestamp()).await.unwrap();

        let first = store.retrieve().await.unwrap();
        let second = store.retrieve().await.unwrap();

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_insert_fully_replaces_previous_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        store.insert(unique_feed(), timestamp()).await.unwrap();

        let latest = unique_feed();
        let later = timestamp() + chrono::Duration::hours(1);
        store.insert(latest.clone(), later).await.unwrap();

        let cached = store.retrieve().await.unwrap().unwrap();
        assert_eq!(cached.feed, latest);
        assert_eq!(cached.timestamp, later);
    }

    #[tokio::test]
    async fn test_insert_delivers_error_on_invalid_path() {
        let store = FileSystemFeedStore::new("/nonexistent-dir/feed-cache.json");

        let result = store.insert(unique_feed(), timestamp()).await;

        assert!(matches!(result, Err(StoreError::Insertion(_))));
    }

    #[tokio::test]
    async fn test_insert_leaves_no_staging_file_behind() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        store.insert(unique_feed(), timestamp()).await.unwrap();

        assert!(!store.staging_path().exists());
    }

    #[tokio::test]
    async fn test_delete_succeeds_on_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        store.delete_cached_feed().await.unwrap();
    }

    #[tokio::test]
    async fn test_delete_removes_inserted_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        store.insert(unique_feed(), timestamp()).await.unwrap();

        store.delete_cached_feed().await.unwrap();

        assert_eq!(store.retrieve().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_timestamp_is_persisted_as_rfc3339() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("feed-cache.json");
        let store = FileSystemFeedStore::new(path.clone());

        store.insert(unique_feed(), timestamp()).await.unwrap();

        let raw = tokio::fs::read_to_string(&path).await.unwrap();
        assert!(raw.contains("2026-08-28T10:00:00Z"));
    }
}
