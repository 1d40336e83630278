//! Environment configuration API methods.
//!
//! # What this module handles:
//! - Listing, fetching, creating and deleting environments
//! - Patching environment membership (pipelines, agents, variables)
//!
//! # What this module does NOT handle:
//! - Optimistic locking via the environment's ETag (not sent or tracked)

use tokio_util::sync::CancellationToken;

use crate::client::GocdClient;
use crate::client::paths::encode_path_segment;
use crate::client::transport::ApiVersion;
use crate::error::Result;
use crate::models::{Environment, EnvironmentPatchRequest, EnvironmentsResponse};
use crate::response::ApiResponse;

const ENVIRONMENTS_PATH: &str = "admin/environments";
const ENVIRONMENT_ROUTE: &str = "admin/environments/{name}";

/// Every environment endpoint speaks v2.
const ENVIRONMENTS_API: ApiVersion = ApiVersion::V2;

/// Service for `admin/environments`, borrowed from [`GocdClient::environments`].
#[derive(Debug, Clone, Copy)]
pub struct EnvironmentsService<'a> {
    client: &'a GocdClient,
}

impl<'a> EnvironmentsService<'a> {
    pub(crate) fn new(client: &'a GocdClient) -> Self {
        Self { client }
    }

    /// List all environments.
    #[tracing::instrument(skip(self, cancel))]
    pub async fn list(
        &self,
        cancel: &CancellationToken,
    ) -> Result<(EnvironmentsResponse, ApiResponse)> {
        self.client
            .get_action(cancel, ENVIRONMENTS_PATH, ENVIRONMENTS_PATH, ENVIRONMENTS_API)
            .await
    }

    /// Get a single environment by name.
    #[tracing::instrument(skip(self, cancel))]
    pub async fn get(
        &self,
        cancel: &CancellationToken,
        name: &str,
    ) -> Result<(Environment, ApiResponse)> {
        let path = environment_path(name)?;
        self.client
            .get_action(cancel, &path, ENVIRONMENT_ROUTE, ENVIRONMENTS_API)
            .await
    }

    /// Create an empty environment called `name`.
    #[tracing::instrument(skip(self, cancel))]
    pub async fn create(
        &self,
        cancel: &CancellationToken,
        name: &str,
    ) -> Result<(Environment, ApiResponse)> {
        let body = Environment::named(name);
        self.client
            .post_action(
                cancel,
                ENVIRONMENTS_PATH,
                ENVIRONMENTS_PATH,
                Some(&body),
                ENVIRONMENTS_API,
            )
            .await
    }

    /// Delete an environment, returning the server's confirmation message.
    #[tracing::instrument(skip(self, cancel))]
    pub async fn delete(
        &self,
        cancel: &CancellationToken,
        name: &str,
    ) -> Result<(String, ApiResponse)> {
        let path = environment_path(name)?;
        self.client
            .delete_action(cancel, &path, ENVIRONMENT_ROUTE, ENVIRONMENTS_API)
            .await
    }

    /// Add or remove pipelines, agents and environment variables.
    #[tracing::instrument(skip(self, cancel, patch))]
    pub async fn patch(
        &self,
        cancel: &CancellationToken,
        name: &str,
        patch: &EnvironmentPatchRequest,
    ) -> Result<(Environment, ApiResponse)> {
        let path = environment_path(name)?;
        self.client
            .patch_action(cancel, &path, ENVIRONMENT_ROUTE, patch, ENVIRONMENTS_API)
            .await
    }
}

fn environment_path(name: &str) -> Result<String> {
    Ok(format!("{ENVIRONMENTS_PATH}/{}", encode_path_segment(name)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClientError;

    #[test]
    fn test_environment_path() {
        assert_eq!(environment_path("qa").unwrap(), "admin/environments/qa");
        assert_eq!(
            environment_path("qa/prod").unwrap(),
            "admin/environments/qa%2Fprod"
        );
    }

    #[tokio::test]
    async fn test_get_rejects_dot_segment_before_sending() {
        let client = GocdClient::builder()
            .base_url("http://127.0.0.1:1/go/".to_string())
            .build()
            .unwrap();
        let cancel = CancellationToken::new();

        let result = client.environments().get(&cancel, "..").await;
        assert!(matches!(result, Err(ClientError::InvalidUrl(_))));
    }
}
