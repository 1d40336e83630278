//! Pipeline status, scheduling control and run history.
//!
//! # What this module handles:
//! - Reading a pipeline's pause/lock/schedulable status
//! - Pausing, unpausing and releasing a pipeline lock
//! - Fetching a single pipeline run or a page of run history
//!
//! # Invariants
//! - State-changing calls carry the confirmation headers the server requires
//! - State-changing calls report `true` only for HTTP 200

use reqwest::Method;
use tokio_util::sync::CancellationToken;

use crate::client::GocdClient;
use crate::client::paths::encode_path_segment;
use crate::client::transport::ApiVersion;
use crate::error::{ClientError, Result};
use crate::models::{PipelineHistory, PipelineInstance, PipelineStatus};
use crate::response::ApiResponse;

/// Service for `pipelines/...`, borrowed from [`GocdClient::pipelines`].
#[derive(Debug, Clone, Copy)]
pub struct PipelinesService<'a> {
    client: &'a GocdClient,
}

impl<'a> PipelinesService<'a> {
    pub(crate) fn new(client: &'a GocdClient) -> Self {
        Self { client }
    }

    /// Whether the pipeline is locked, paused and schedulable.
    #[tracing::instrument(skip(self, cancel))]
    pub async fn get_status(
        &self,
        cancel: &CancellationToken,
        name: &str,
    ) -> Result<(PipelineStatus, ApiResponse)> {
        let path = pipeline_path(name, "status", 0)?;
        self.client
            .get_action(cancel, &path, "pipelines/{name}/status", ApiVersion::Unversioned)
            .await
    }

    /// Pause the pipeline so it stops picking up new build events.
    #[tracing::instrument(skip(self, cancel))]
    pub async fn pause(&self, cancel: &CancellationToken, name: &str) -> Result<(bool, ApiResponse)> {
        self.pipeline_action(cancel, name, "pause", "pipelines/{name}/pause")
            .await
    }

    /// Unpause the pipeline so it handles new build events again.
    #[tracing::instrument(skip(self, cancel))]
    pub async fn unpause(
        &self,
        cancel: &CancellationToken,
        name: &str,
    ) -> Result<(bool, ApiResponse)> {
        self.pipeline_action(cancel, name, "unpause", "pipelines/{name}/unpause")
            .await
    }

    /// Release the lock held by a locked pipeline.
    #[tracing::instrument(skip(self, cancel))]
    pub async fn release_lock(
        &self,
        cancel: &CancellationToken,
        name: &str,
    ) -> Result<(bool, ApiResponse)> {
        self.pipeline_action(cancel, name, "releaseLock", "pipelines/{name}/releaseLock")
            .await
    }

    /// Fetch one pipeline run.
    ///
    /// `counter` selects the run; `0` asks the server for its default.
    #[tracing::instrument(skip(self, cancel))]
    pub async fn get_instance(
        &self,
        cancel: &CancellationToken,
        name: &str,
        counter: u32,
    ) -> Result<(PipelineInstance, ApiResponse)> {
        let path = pipeline_path(name, "instance", counter)?;
        let route = if counter > 0 {
            "pipelines/{name}/instance/{counter}"
        } else {
            "pipelines/{name}/instance"
        };
        self.client
            .get_action(cancel, &path, route, ApiVersion::Unversioned)
            .await
    }

    /// Fetch a page of run history, newest first.
    ///
    /// `offset` skips that many runs; `0` starts from the latest.
    #[tracing::instrument(skip(self, cancel))]
    pub async fn get_history(
        &self,
        cancel: &CancellationToken,
        name: &str,
        offset: u32,
    ) -> Result<(PipelineHistory, ApiResponse)> {
        let path = pipeline_path(name, "history", offset)?;
        let route = if offset > 0 {
            "pipelines/{name}/history/{offset}"
        } else {
            "pipelines/{name}/history"
        };
        self.client
            .get_action(cancel, &path, route, ApiVersion::Unversioned)
            .await
    }

    async fn pipeline_action(
        &self,
        cancel: &CancellationToken,
        name: &str,
        action: &str,
        route: &'static str,
    ) -> Result<(bool, ApiResponse)> {
        let path = pipeline_path(name, action, 0)?;
        let request = self
            .client
            .new_request(Method::POST, &path, None::<&()>, ApiVersion::Unversioned)?
            .with_route(route)
            .confirmed();
        let response = self.client.send(cancel, request).await?;

        if response.status() == 200 {
            tracing::info!(pipeline = %name, action, "Pipeline action accepted");
            Ok((true, response))
        } else {
            Err(ClientError::UnexpectedStatus {
                expected: 200,
                response: Box::new(response),
            })
        }
    }
}

/// `pipelines/{name}/{action}`, with `/{n}` appended when `n > 0`.
fn pipeline_path(name: &str, action: &str, n: u32) -> Result<String> {
    let name = encode_path_segment(name)?;
    Ok(if n > 0 {
        format!("pipelines/{name}/{action}/{n}")
    } else {
        format!("pipelines/{name}/{action}")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pipeline_path_without_offset() {
        assert_eq!(
            pipeline_path("up42", "status", 0).unwrap(),
            "pipelines/up42/status"
        );
        assert_eq!(
            pipeline_path("up42", "releaseLock", 0).unwrap(),
            "pipelines/up42/releaseLock"
        );
    }

    #[test]
    fn test_pipeline_path_with_offset() {
        assert_eq!(
            pipeline_path("up42", "history", 10).unwrap(),
            "pipelines/up42/history/10"
        );
        assert_eq!(
            pipeline_path("up42", "instance", 3).unwrap(),
            "pipelines/up42/instance/3"
        );
    }

    #[test]
    fn test_pipeline_path_encodes_name() {
        assert_eq!(
            pipeline_path("my pipeline", "pause", 0).unwrap(),
            "pipelines/my%20pipeline/pause"
        );
        assert!(pipeline_path("..", "pause", 0).is_err());
    }
}
