//! Data models for GoCD API requests and responses.
//!
//! Types are organized by resource in submodules and re-exported here
//! for convenient access.

pub mod agents;
pub mod common;
pub mod environments;
pub mod patch;
pub mod pipelines;
pub mod version;

pub use agents::Agent;
pub use common::{HalLink, HalLinks, RemoveLinks};
pub use environments::{
    EmbeddedEnvironments, Environment, EnvironmentPatchRequest, EnvironmentVariable,
    EnvironmentVariablesAction, EnvironmentsResponse,
};
pub use patch::{PatchAction, PatchStringAction};
pub use pipelines::{
    BuildCause, Job, Material, MaterialAttributes, MaterialRevision, Modification, Pagination,
    Pipeline, PipelineHistory, PipelineInstance, PipelineStatus, RevisionMaterial, Stage,
};
pub use version::Version;
