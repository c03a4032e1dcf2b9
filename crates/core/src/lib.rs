//! Core types and shared functionality for feedcask.
//!
//! This crate provides:
//! - The feed domain model
//! - The cache layer: store capability, expiration policy, local loader,
//!   and a file-backed store
//! - Unified store error types
//! - Configuration structures

pub mod cache;
pub mod clock;
pub mod config;
pub mod error;
pub mod feed;

pub use cache::{CachedFeed, FeedStore, FileSystemFeedStore, LocalFeedItem, LocalFeedLoader};
pub use clock::{Clock, SystemClock};
pub use error::StoreError;
pub use feed::{FeedItem, FeedLoader};
