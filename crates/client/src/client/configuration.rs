//! Server configuration endpoints.

use tokio_util::sync::CancellationToken;

use crate::client::GocdClient;
use crate::client::transport::ApiVersion;
use crate::error::Result;
use crate::models::Version;
use crate::response::ApiResponse;

/// Service for server-level metadata, borrowed from [`GocdClient::configuration`].
#[derive(Debug, Clone, Copy)]
pub struct ConfigurationService<'a> {
    client: &'a GocdClient,
}

impl<'a> ConfigurationService<'a> {
    pub(crate) fn new(client: &'a GocdClient) -> Self {
        Self { client }
    }

    /// Server version and build metadata from `GET api/version`.
    #[tracing::instrument(skip(self, cancel))]
    pub async fn get_version(&self, cancel: &CancellationToken) -> Result<(Version, ApiResponse)> {
        self.client
            .get_action(cancel, "version", "version", ApiVersion::V1)
            .await
    }
}
