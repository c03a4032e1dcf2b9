//! Configuration validation rules.
//!
//! This module provides validation logic for `AppConfig` values after they
//! have been loaded from environment, files, or defaults.

use thiserror::Error;
use url::Url;

use crate::config::AppConfig;

/// Configuration validation errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    LoadFailed(String),

    #[error("invalid configuration: {field} - {reason}")]
    Invalid { field: String, reason: String },

    #[error("missing required configuration: {field} ({hint})")]
    Missing { field: String, hint: String },
}

impl AppConfig {
    /// Validate configuration values after loading.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` if:
    /// - `feed_url` is set but does not parse as an absolute URL
    /// - `timeout_ms` is less than 100ms or exceeds 5 minutes
    /// - `user_agent` is empty
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(raw) = self.feed_url.as_deref() {
            Url::parse(raw)
                .map_err(|e| ConfigError::Invalid { field: "feed_url".into(), reason: e.to_string() })?;
        }

        if self.timeout_ms < 100 {
            return Err(ConfigError::Invalid { field: "timeout_ms".into(), reason: "must be at least 100ms".into() });
        }
        if self.timeout_ms > 300_000 {
            return Err(ConfigError::Invalid {
                field: "timeout_ms".into(),
                reason: "must not exceed 5 minutes (300000ms)".into(),
            });
        }

        if self.user_agent.is_empty() {
            return Err(ConfigError::Invalid { field: "user_agent".into(), reason: "must not be empty".into() });
        }

        if self.cache_path.as_os_str().is_empty() {
            return Err(ConfigError::Invalid { field: "cache_path".into(), reason: "must not be empty".into() });
        }

        Ok(())
    }
}
