//! Remote feed loader.
//!
//! Fetches the feed endpoint and maps the raw response through the wire
//! mapper. One fetch per `load` call; repeated calls are independent, never
//! deduplicated or cached. Persisting what was fetched is the cache layer's
//! business, typically a `LocalFeedLoader::save` after a successful load.

pub mod error;
mod mapper;

pub use error::RemoteError;

use url::Url;

use crate::http::HttpClient;
use feedcask_core::config::{AppConfig, ConfigError};
use feedcask_core::{FeedItem, FeedLoader};

/// Loads the feed from a remote endpoint over an injected transport.
///
/// Completions are futures: dropping a pending `load` (or aborting the task
/// driving it) suppresses delivery of its result.
pub struct RemoteFeedLoader<C> {
    url: Url,
    client: C,
}

impl<C: HttpClient> RemoteFeedLoader<C> {
    pub fn new(url: Url, client: C) -> Self {
        Self { url, client }
    }

    /// Loader for the configured feed endpoint.
    pub fn from_config(config: &AppConfig, client: C) -> Result<Self, ConfigError> {
        Ok(Self::new(config.require_feed_url()?, client))
    }

    /// Fetch and decode the remote feed.
    ///
    /// A transport-level failure is reported as [`RemoteError::Connectivity`];
    /// anything the endpoint answers that is not a status-200 well-formed
    /// feed is [`RemoteError::InvalidData`]. The two are never conflated.
    pub async fn load(&self) -> Result<Vec<FeedItem>, RemoteError> {
        let response = self.client.get(&self.url).await.map_err(|error| {
            tracing::debug!("feed fetch failed: {error}");
            RemoteError::Connectivity
        })?;

        mapper::map(response.status, &response.body)
    }
}

#[async_trait::async_trait]
impl<C: HttpClient> FeedLoader for RemoteFeedLoader<C> {
    type Error = RemoteError;

    async fn load(&self) -> Result<Vec<FeedItem>, RemoteError> {
        RemoteFeedLoader::load(self).await
    }
}
