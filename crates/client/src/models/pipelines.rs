//! Pipeline models: configuration shape, run history, and scheduling status.

use serde::{Deserialize, Serialize};

use super::common::{HalLinks, RemoveLinks};

/// A pipeline definition.
///
/// Environment responses embed pipelines with only `_links` and `name`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Pipeline {
    #[serde(rename = "_links", default, skip_serializing_if = "Option::is_none")]
    pub links: Option<HalLinks>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label_template: Option<String>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub enable_pipeline_locking: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub materials: Vec<Material>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub stages: Vec<Stage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

impl RemoveLinks for Pipeline {
    fn remove_links(&mut self) {
        self.links = None;
    }
}

/// An upstream dependency (SCM repository, another pipeline, ...).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Material {
    #[serde(rename = "type")]
    pub material_type: String,
    #[serde(default)]
    pub attributes: MaterialAttributes,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MaterialAttributes {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,
    /// Ignore/whitelist filter; its shape varies by material type.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub invert_filter: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub auto_update: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submodule_folder: Option<String>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub shallow_clone: bool,
}

/// A stage, either as configured or as run inside a pipeline instance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Stage {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub counter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approval_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approved_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheduled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub can_run: Option<bool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub jobs: Vec<Job>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<String>,
    /// Milliseconds since the Unix epoch.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheduled_date: Option<i64>,
}

/// One page of pipeline runs, newest first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PipelineHistory {
    #[serde(default)]
    pub pipelines: Vec<PipelineInstance>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Pagination>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub offset: u64,
    pub total: u64,
    pub page_size: u64,
}

/// A single pipeline run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PipelineInstance {
    #[serde(default)]
    pub build_cause: BuildCause,
    #[serde(default)]
    pub can_run: bool,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub counter: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default)]
    pub natural_order: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(default)]
    pub stages: Vec<Stage>,
}

/// What triggered a pipeline run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BuildCause {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approver: Option<String>,
    #[serde(default)]
    pub material_revisions: Vec<MaterialRevision>,
    #[serde(default)]
    pub trigger_forced: bool,
    #[serde(default)]
    pub trigger_message: String,
}

/// The version of a material that a run picked up.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MaterialRevision {
    #[serde(default)]
    pub modifications: Vec<Modification>,
    pub material: RevisionMaterial,
    #[serde(default)]
    pub changed: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevisionMaterial {
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub fingerprint: String,
    #[serde(rename = "type", default)]
    pub material_type: String,
    #[serde(default)]
    pub id: i64,
}

/// A commit or revision within a material.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Modification {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email_address: Option<String>,
    #[serde(default)]
    pub id: i64,
    /// Milliseconds since the Unix epoch.
    #[serde(default)]
    pub modified_time: i64,
    #[serde(default)]
    pub user_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(default)]
    pub revision: String,
}

/// Whether a pipeline can currently be scheduled.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineStatus {
    pub locked: bool,
    pub paused: bool,
    pub schedulable: bool,
    #[serde(rename = "pausedCause", default, skip_serializing_if = "Option::is_none")]
    pub paused_cause: Option<String>,
    #[serde(rename = "pausedBy", default, skip_serializing_if = "Option::is_none")]
    pub paused_by: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_embedded_pipeline_shape() {
        let pipeline: Pipeline = serde_json::from_value(serde_json::json!({
            "_links": {"self": {"href": "https://ci.example.com/go/api/admin/pipelines/up42"}},
            "name": "up42"
        }))
        .unwrap();
        assert_eq!(pipeline.name, "up42");
        assert!(pipeline.links.is_some());
        assert!(pipeline.stages.is_empty());
    }

    #[test]
    fn test_material_type_rename() {
        let material: Material = serde_json::from_value(serde_json::json!({
            "type": "git",
            "attributes": {
                "url": "https://github.com/gocd/gocd",
                "branch": "master",
                "filter": {"ignore": ["docs/**"]},
                "auto_update": true
            }
        }))
        .unwrap();
        assert_eq!(material.material_type, "git");
        assert_eq!(material.attributes.branch.as_deref(), Some("master"));
        assert!(material.attributes.auto_update);
        assert!(material.attributes.filter.is_some());
    }

    #[test]
    fn test_pipeline_status_camel_case_fields() {
        let status: PipelineStatus = serde_json::from_value(serde_json::json!({
            "pausedCause": "Maintenance",
            "pausedBy": "admin",
            "paused": true,
            "schedulable": false,
            "locked": false
        }))
        .unwrap();
        assert!(status.paused);
        assert_eq!(status.paused_cause.as_deref(), Some("Maintenance"));
        assert_eq!(status.paused_by.as_deref(), Some("admin"));
    }
}
