//! Expiration policy for cached snapshots.

use chrono::{DateTime, Days, Utc};

const MAX_CACHE_AGE_DAYS: u64 = 7;

/// Decides whether a snapshot timestamp is still trustworthy.
///
/// A pure function of the stored timestamp and the current time; it holds no
/// state and performs no I/O. The cut-off uses calendar-day addition rather
/// than a fixed number of hours, so it stays stable across daylight-saving
/// transitions.
pub(crate) struct FeedCachePolicy;

impl FeedCachePolicy {
    /// A snapshot is valid while `now < timestamp + 7 days`, strictly.
    ///
    /// A snapshot aged exactly seven days is expired. An unrepresentable
    /// cut-off date counts as expired (fail closed, never open).
    pub(crate) fn validate(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> bool {
        match timestamp.checked_add_days(Days::new(MAX_CACHE_AGE_DAYS)) {
            Some(max_cache_age) => now < max_cache_age,
            None => false,
        }
    }
}
