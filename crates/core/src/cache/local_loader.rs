//! Load, save, and validate-and-self-heal over an injected store.

use crate::cache::policy::FeedCachePolicy;
use crate::cache::store::{FeedStore, LocalFeedItem};
use crate::clock::{Clock, SystemClock};
use crate::config::AppConfig;
use crate::error::StoreError;
use crate::feed::{FeedItem, FeedLoader};

use super::FileSystemFeedStore;

/// Orchestrates the cache store and the expiration policy.
///
/// The loader decides when cached data is trustworthy and sequences
/// delete/insert/retrieve as one logical transaction; the store only moves
/// snapshots to and from the persistent medium. The clock is injected so
/// expiration is testable without a wall clock.
///
/// Operations complete as futures. Dropping a pending operation (or
/// aborting the task driving it) suppresses delivery of its completion;
/// the work may still finish underneath, but no observer sees the result.
/// None of the operations can be cancelled once the store has been asked
/// to act, and no internal locking serializes concurrent calls.
pub struct LocalFeedLoader<S, C> {
    store: S,
    clock: C,
}

impl<S: FeedStore, C: Clock> LocalFeedLoader<S, C> {
    pub fn new(store: S, clock: C) -> Self {
        Self { store, clock }
    }

    /// Read the cached feed.
    ///
    /// An absent or expired snapshot is an empty result, not an error:
    /// expiration is expected steady-state behavior. Only a snapshot that
    /// fails to decode surfaces as `Err`, verbatim from the store. Reading
    /// never mutates the store.
    pub async fn load(&self) -> Result<Vec<FeedItem>, StoreError> {
        match self.store.retrieve().await? {
            Some(cached) if FeedCachePolicy::validate(cached.timestamp, self.clock.now()) => {
                Ok(cached.feed.into_iter().map(FeedItem::from).collect())
            }
            _ => Ok(Vec::new()),
        }
    }

    /// Replace the cached snapshot with `feed`, stamped with the current time.
    ///
    /// Two phases, strictly sequenced: the previous snapshot is deleted
    /// first, and insertion does not start before the deletion's completion
    /// is observed. A deletion error aborts the save without inserting; an
    /// insertion error is surfaced as the operation's error. A crash between
    /// the phases leaves the cache empty, never duplicated or mixed.
    pub async fn save(&self, feed: Vec<FeedItem>) -> Result<(), StoreError> {
        self.store.delete_cached_feed().await?;
        let local = feed.into_iter().map(LocalFeedItem::from).collect();
        self.store.insert(local, self.clock.now()).await
    }

    /// Delete the snapshot if it is stale or corrupt; otherwise do nothing.
    ///
    /// This is the self-healing path: the only place a deletion happens as a
    /// consequence of staleness or corruption rather than as a request to
    /// replace. The corrective deletion is fire-and-forget; its outcome is
    /// logged but reported to no caller.
    pub async fn validate_cache(&self) {
        let invalid = match self.store.retrieve().await {
            Ok(Some(cached)) => !FeedCachePolicy::validate(cached.timestamp, self.clock.now()),
            Ok(None) => false,
            Err(error) => {
                tracing::debug!("feed cache retrieval failed during validation: {error}");
                true
            }
        };

        if invalid {
            if let Err(error) = self.store.delete_cached_feed().await {
                tracing::warn!("failed to delete invalid feed cache: {error}");
            }
        }
    }
}

#[async_trait::async_trait]
impl<S: FeedStore, C: Clock> FeedLoader for LocalFeedLoader<S, C> {
    type Error = StoreError;

    async fn load(&self) -> Result<Vec<FeedItem>, StoreError> {
        LocalFeedLoader::load(self).await
    }
}

impl LocalFeedLoader<FileSystemFeedStore, SystemClock> {
    /// Loader over the configured cache file, using the system clock.
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(FileSystemFeedStore::new(config.cache_path.clone()), SystemClock)
    }
}
