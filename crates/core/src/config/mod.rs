//! Application configuration with layered loading.
//!
//! This module provides configuration management using figment for layered
//! configuration loading from multiple sources:
//!
//! 1. Environment variables (FEEDCASK_*)
//! 2. TOML config file (if FEEDCASK_CONFIG_FILE set)
//! 3. Built-in defaults

use std::path::PathBuf;
use std::time::Duration;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use url::Url;

mod validation;

pub use validation::ConfigError;

/// Application configuration with layered loading.
///
/// Loading precedence (highest wins):
/// 1. Environment variables (FEEDCASK_*)
/// 2. TOML config file (if FEEDCASK_CONFIG_FILE set)
/// 3. Built-in defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Remote feed endpoint URL.
    ///
    /// Set via FEEDCASK_FEED_URL environment variable.
    /// Required only when a remote loader is constructed.
    #[serde(default)]
    pub feed_url: Option<String>,

    /// Path to the JSON cache file.
    ///
    /// Set via FEEDCASK_CACHE_PATH environment variable.
    #[serde(default = "default_cache_path")]
    pub cache_path: PathBuf,

    /// User-Agent string for HTTP requests.
    ///
    /// Set via FEEDCASK_USER_AGENT environment variable.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// HTTP request timeout in milliseconds.
    ///
    /// Set via FEEDCASK_TIMEOUT_MS environment variable.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_cache_path() -> PathBuf {
    PathBuf::from("./feedcask-cache.json")
}

fn default_user_agent() -> String {
    "feedcask/0.1".into()
}

fn default_timeout_ms() -> u64 {
    10_000
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            feed_url: None,
            cache_path: default_cache_path(),
            user_agent: default_user_agent(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

impl AppConfig {
    /// Timeout as Duration for use with reqwest/tokio.
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Load configuration from all sources with layered precedence.
    ///
    /// Priority (highest wins):
    /// 1. Environment variables prefixed with `FEEDCASK_`
    /// 2. TOML file from `FEEDCASK_CONFIG_FILE` (if set)
    /// 3. Built-in defaults via `Default::default()`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a source cannot be read or validation fails
    /// after loading.
    pub fn load() -> Result<Self, ConfigError> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Ok(config_path) = std::env::var("FEEDCASK_CONFIG_FILE") {
            figment = figment.merge(Toml::file(&config_path));
        }

        figment = figment.merge(Env::prefixed("FEEDCASK_").map(|key| key.as_str().to_lowercase().into()));

        let config: Self = figment.extract().map_err(|e| ConfigError::LoadFailed(e.to_string()))?;

        config.validate()?;

        Ok(config)
    }

    /// Parsed feed endpoint URL (for deferred validation).
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Missing` if no feed URL is configured, or
    /// `ConfigError::Invalid` if the configured value does not parse.
    pub fn require_feed_url(&self) -> Result<Url, ConfigError> {
        let raw = self.feed_url.as_deref().ok_or_else(|| ConfigError::Missing {
            field: "feed_url".into(),
            hint: "Set FEEDCASK_FEED_URL environment variable".into(),
        })?;

        Url::parse(raw).map_err(|e| ConfigError::Invalid { field: "feed_url".into(), reason: e.to_string() })
    }
}
