//! The store capability and its storage records.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use url::Url;
use uuid::Uuid;

use crate::error::StoreError;
use crate::feed::FeedItem;

/// Storage representation of a [`FeedItem`].
///
/// Decoupled from the domain type so storage-format evolution never changes
/// the domain type's shape. Conversion both ways is total and lossless.
/// The storage field for the image is named `url`, distinct from the wire
/// format's `image`; only the domain type is shared between layers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalFeedItem {
    pub id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub url: Url,
}

impl From<FeedItem> for LocalFeedItem {
    fn from(item: FeedItem) -> Self {
        Self { id: item.id, description: item.description, location: item.location, url: item.image_url }
    }
}

impl From<LocalFeedItem> for FeedItem {
    fn from(item: LocalFeedItem) -> Self {
        Self { id: item.id, description: item.description, location: item.location, image_url: item.url }
    }
}

/// A cached snapshot: the entire feed plus the creation time stamped by the
/// local loader at save time. The store never sets the timestamp itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CachedFeed {
    pub feed: Vec<LocalFeedItem>,
    pub timestamp: DateTime<Utc>,
}

/// Narrow store capability used by
/// [`LocalFeedLoader`](crate::cache::LocalFeedLoader).
///
/// Implementations move whole snapshots to and from a persistent medium and
/// are deliberately ignorant of expiration policy. Keeping the seam this
/// narrow makes the file-backed store and an in-memory test double
/// interchangeable.
#[async_trait]
pub trait FeedStore: Send + Sync {
    /// Read the current snapshot.
    ///
    /// `Ok(None)` means nothing was ever saved. Bytes that exist but do not
    /// decode into a snapshot are a [`StoreError::Retrieval`], never `None`:
    /// callers must be able to tell the two apart.
    async fn retrieve(&self) -> Result<Option<CachedFeed>, StoreError>;

    /// Replace the cache content with a new snapshot.
    ///
    /// This is a blind overwrite; the previous content is never read first.
    async fn insert(&self, feed: Vec<LocalFeedItem>, timestamp: DateTime<Utc>) -> Result<(), StoreError>;

    /// Remove the cached snapshot. Removing an absent snapshot succeeds.
    async fn delete_cached_feed(&self) -> Result<(), StoreError>;
}
