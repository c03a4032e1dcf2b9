//! Store error types for the cache layer.

/// Errors reported by a [`FeedStore`](crate::cache::FeedStore) implementation.
///
/// `Clone` so test doubles can replay a stubbed error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// Cache bytes exist but do not decode into a snapshot.
    #[error("retrieval failed: {0}")]
    Retrieval(String),

    /// Write to the persistent medium failed.
    #[error("insertion failed: {0}")]
    Insertion(String),

    /// Removal from the persistent medium failed.
    #[error("deletion failed: {0}")]
    Deletion(String),
}
