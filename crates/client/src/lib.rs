//! GoCD REST API client.
//!
//! This crate provides a type-safe, async client for a GoCD server's REST
//! API: environment configuration, pipeline status and scheduling control,
//! pipeline run history, and server version metadata.
//!
//! Every call takes a [`CancellationToken`] and returns the decoded value
//! together with the raw [`ApiResponse`]. Failures that happen after a
//! response arrived carry that response inside the [`ClientError`].

pub mod client;
pub mod error;
pub mod metrics;
pub mod models;
pub mod response;
pub mod tracing;

#[cfg(any(feature = "test-utils", test))]
pub mod testing;

pub use client::GocdClient;
pub use client::builder::GocdClientBuilder;
pub use client::configuration::ConfigurationService;
pub use client::environments::EnvironmentsService;
pub use client::pipelines::PipelinesService;
pub use client::transport::{ApiRequest, ApiVersion, sanitize_url};
pub use error::{ClientError, Result};
pub use metrics::{ErrorCategory, MetricsCollector};
pub use models::{
    Agent, Environment, EnvironmentPatchRequest, EnvironmentVariable, EnvironmentsResponse,
    HalLink, HalLinks, PatchAction, PatchStringAction, Pipeline, PipelineHistory,
    PipelineInstance, PipelineStatus, RemoveLinks, Version,
};
pub use response::ApiResponse;
pub use tokio_util::sync::CancellationToken;
