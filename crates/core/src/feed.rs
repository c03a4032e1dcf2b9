//! The canonical in-memory representation of a feed item, and the shared
//! loading abstraction over it.

use async_trait::async_trait;
use url::Url;
use uuid::Uuid;

/// A single item in the feed.
///
/// Equality is structural over all fields. The cache has no update-by-id
/// semantics, only whole-snapshot replace, so two items sharing an `id` but
/// differing elsewhere are distinct values, not versions of one another.
///
/// The domain type knows nothing about wire or storage formats; those
/// layers keep their own representations and convert at the boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedItem {
    pub id: Uuid,
    pub description: Option<String>,
    pub location: Option<String>,
    pub image_url: Url,
}

/// Anything that can produce the feed.
///
/// Both the cache-backed loader and the remote loader implement this, each
/// with its own error type, so a caller can hold either behind one seam and
/// swap them freely.
#[async_trait]
pub trait FeedLoader: Send + Sync {
    type Error: std::error::Error;

    async fn load(&self) -> Result<Vec<FeedItem>, Self::Error>;
}
