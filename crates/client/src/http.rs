//! HTTP GET capability.
//!
//! The remote loader depends on this trait rather than on a concrete HTTP
//! stack, so the transport is an injected collaborator and test doubles are
//! trivial. [`ReqwestHttpClient`] is the production implementation.

use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use url::Url;

use feedcask_core::config::AppConfig;

/// Raw result of a GET: the body bytes and the HTTP status code.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Bytes,
}

/// Transport-level failure: the request never produced an HTTP status.
#[derive(Debug, Clone, thiserror::Error)]
#[error("transport error: {0}")]
pub struct TransportError(pub String);

/// One GET per call; no retries, no deduplication, no caching.
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn get(&self, url: &Url) -> Result<HttpResponse, TransportError>;
}

/// Configuration for the reqwest-backed client.
#[derive(Debug, Clone)]
pub struct HttpConfig {
    /// User agent string (default: "feedcask/0.1")
    pub user_agent: String,

    /// Request timeout (default: 10s)
    pub timeout: Duration,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self { user_agent: "feedcask/0.1".to_string(), timeout: Duration::from_millis(10_000) }
    }
}

/// Default transport backed by reqwest.
#[derive(Debug, Clone)]
pub struct ReqwestHttpClient {
    http: reqwest::Client,
}

impl ReqwestHttpClient {
    /// Create a new client with the given configuration.
    pub fn new(config: HttpConfig) -> Result<Self, TransportError> {
        let http = reqwest::Client::builder()
            .user_agent(&config.user_agent)
            .timeout(config.timeout)
            .use_rustls_tls()
            .gzip(true)
            .brotli(true)
            .deflate(true)
            .build()
            .map_err(|e| TransportError(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { http })
    }

    /// Create a new client from the application configuration.
    pub fn from_config(config: &AppConfig) -> Result<Self, TransportError> {
        Self::new(HttpConfig { user_agent: config.user_agent.clone(), timeout: config.timeout() })
    }
}

#[async_trait]
impl HttpClient for ReqwestHttpClient {
    async fn get(&self, url: &Url) -> Result<HttpResponse, TransportError> {
        let response = self
            .http
            .get(url.as_str())
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| TransportError(format!("network error: {e}")))?;

        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| TransportError(format!("failed to read response: {e}")))?;

        tracing::debug!("GET {} -> {} ({} bytes)", url, status, body.len());

        Ok(HttpResponse { status, body })
    }
}
