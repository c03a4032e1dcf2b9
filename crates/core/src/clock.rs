//! Wall-clock capability.
//!
//! The local loader never reads the system clock directly; a [`Clock`] is
//! injected so expiration decisions can be tested against a fixed time.

use chrono::{DateTime, Utc};

/// Provider of the current time.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Production clock backed by [`Utc::now`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
