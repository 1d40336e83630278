//! Client builder for constructing [`GocdClient`] instances.
//!
//! This module is responsible for:
//! - Providing a fluent builder API for client configuration
//! - Validating the base URL and normalizing it to end with a slash
//! - Configuring the underlying HTTP client (timeout)
//!
//! # Invariants
//! - `base_url` is required and must be an absolute http(s) URL
//! - Credentials are only attached to requests when both parts are non-empty

use secrecy::SecretString;
use std::fmt;
use std::time::Duration;
use url::Url;

use crate::client::GocdClient;
use crate::client::transport::display_url;
use crate::error::{ClientError, Result};
use crate::metrics::MetricsCollector;
use gocd_config::{Configuration, constants::DEFAULT_TIMEOUT_SECS, redact_url};

/// Relative prefix under which all REST resources live.
const API_PREFIX: &str = "api/";

/// Builder for creating a new [`GocdClient`].
///
/// # Example
///
/// ```rust,ignore
/// use gocd_client::GocdClient;
///
/// let client = GocdClient::builder()
///     .base_url("https://ci.example.com/go/".to_string())
///     .timeout(Duration::from_secs(10))
///     .build()?;
/// ```
pub struct GocdClientBuilder {
    base_url: Option<String>,
    username: Option<String>,
    password: Option<SecretString>,
    timeout: Duration,
    metrics: Option<MetricsCollector>,
}

impl Default for GocdClientBuilder {
    fn default() -> Self {
        Self {
            base_url: None,
            username: None,
            password: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            metrics: None,
        }
    }
}

impl fmt::Debug for GocdClientBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GocdClientBuilder")
            .field("base_url", &self.base_url.as_deref().map(redact_url))
            .field("username", &self.username)
            .field("password", &self.password)
            .field("timeout", &self.timeout)
            .field("metrics", &self.metrics)
            .finish()
    }
}

impl GocdClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the server base URL, e.g. `https://ci.example.com/go/`.
    ///
    /// A trailing slash is added when missing.
    pub fn base_url(mut self, url: String) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Set basic-auth credentials.
    pub fn credentials(mut self, username: String, password: String) -> Self {
        self.username = Some(username);
        self.password = Some(SecretString::new(password.into()));
        self
    }

    /// Set the per-request timeout. Default is 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Record request metrics through the given collector.
    pub fn metrics(mut self, metrics: MetricsCollector) -> Self {
        self.metrics = Some(metrics);
        self
    }

    /// Pre-configure the builder from a loaded [`Configuration`].
    pub fn from_config(mut self, config: &Configuration) -> Self {
        self.base_url = Some(config.server.clone());
        self.username = config.username.clone();
        self.password = config.password.clone();
        self.timeout = config.timeout;
        self
    }

    /// Build the client.
    ///
    /// # Errors
    /// - `ClientError::InvalidUrl` if the base URL is missing or not http(s)
    /// - `ClientError::HttpError` if the HTTP client cannot be constructed
    pub fn build(self) -> Result<GocdClient> {
        let raw = self
            .base_url
            .ok_or_else(|| ClientError::InvalidUrl("base_url is required".to_string()))?;
        let base_url = normalize_base_url(&raw)?;
        let api_url = base_url
            .join(API_PREFIX)
            .map_err(|e| ClientError::InvalidUrl(format!("invalid base URL: {e}")))?;

        let http = reqwest::Client::builder().timeout(self.timeout).build()?;

        tracing::debug!(
            base_url = %display_url(&base_url),
            timeout = ?self.timeout,
            "Built GoCD client"
        );

        Ok(GocdClient {
            http,
            base_url,
            api_url,
            username: self.username,
            password: self.password,
            timeout: self.timeout,
            metrics: self.metrics,
        })
    }
}

/// Errors never echo `raw`, which may carry a password.
fn normalize_base_url(raw: &str) -> Result<Url> {
    let mut url = Url::parse(raw.trim())
        .map_err(|e| ClientError::InvalidUrl(format!("invalid base URL: {e}")))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ClientError::InvalidUrl(format!(
            "unsupported base URL scheme '{}'",
            url.scheme()
        )));
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}
