//! Main GoCD REST API client.
//!
//! # Submodules
//! - [`builder`]: Client construction and configuration
//! - [`transport`]: Request descriptors, execution and status classification
//! - `paths`: Percent-encoding of caller-supplied path segments
//! - [`environments`], [`pipelines`], [`configuration`]: resource services
//!
//! # Invariants
//! - The client holds no per-call mutable state; it can be shared across
//!   tasks and every call builds its own request and decode target.
//! - Resource services borrow the client; they never own transport state.
//! - No call is ever retried.

pub mod builder;
pub mod configuration;
pub mod environments;
mod paths;
pub mod pipelines;
pub mod transport;

use secrecy::SecretString;
use std::time::Duration;
use url::Url;

use crate::metrics::MetricsCollector;
use configuration::ConfigurationService;
use environments::EnvironmentsService;
use pipelines::PipelinesService;

/// GoCD REST API client.
///
/// # Creating a Client
///
/// ```rust,ignore
/// use gocd_client::GocdClient;
///
/// let client = GocdClient::builder()
///     .base_url("https://ci.example.com/go/".to_string())
///     .credentials("admin".to_string(), "badger".to_string())
///     .build()?;
///
/// let cancel = CancellationToken::new();
/// let (environments, _response) = client.environments().list(&cancel).await?;
/// ```
#[derive(Clone)]
pub struct GocdClient {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: Url,
    pub(crate) api_url: Url,
    pub(crate) username: Option<String>,
    pub(crate) password: Option<SecretString>,
    pub(crate) timeout: Duration,
    pub(crate) metrics: Option<MetricsCollector>,
}

impl std::fmt::Debug for GocdClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GocdClient")
            .field("base_url", &transport::display_url(&self.base_url))
            .field("api_url", &transport::display_url(&self.api_url))
            .field("username", &self.username)
            .field("password", &self.password)
            .field("timeout", &self.timeout)
            .field("metrics", &self.metrics)
            .finish_non_exhaustive()
    }
}

impl GocdClient {
    /// Create a new client builder.
    pub fn builder() -> builder::GocdClientBuilder {
        builder::GocdClientBuilder::new()
    }

    /// Build a client straight from a loaded configuration.
    pub fn from_config(config: &gocd_config::Configuration) -> crate::Result<Self> {
        Self::builder().from_config(config).build()
    }

    /// Server base URL, always ending in `/`.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Whether requests carry basic-auth credentials.
    pub fn has_auth(&self) -> bool {
        gocd_config::credentials_present(self.username.as_deref(), self.password.as_ref())
    }

    /// Environment configuration endpoints.
    pub fn environments(&self) -> EnvironmentsService<'_> {
        EnvironmentsService::new(self)
    }

    /// Pipeline status, scheduling and history endpoints.
    pub fn pipelines(&self) -> PipelinesService<'_> {
        PipelinesService::new(self)
    }

    /// Server configuration endpoints.
    pub fn configuration(&self) -> ConfigurationService<'_> {
        ConfigurationService::new(self)
    }
}
