//! Cache layer for feed snapshots.
//!
//! The cache persists the entire feed plus one timestamp as a single unit.
//! A snapshot is valid for seven calendar days from its creation. The local
//! loader treats an absent or expired snapshot as "no data", never as an
//! error, and its validation pass deletes a snapshot found stale or corrupt.

pub mod file_store;
pub mod local_loader;
pub(crate) mod policy;
pub mod store;

pub use file_store::FileSystemFeedStore;
pub use local_loader::LocalFeedLoader;
pub use store::{CachedFeed, FeedStore, LocalFeedItem};
