//! Environment models for the `admin/environments` API.

use serde::{Deserialize, Serialize};

use super::agents::Agent;
use super::common::{HalLinks, RemoveLinks};
use super::patch::{PatchAction, PatchStringAction};
use super::pipelines::Pipeline;

/// Collection response for `GET admin/environments`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentsResponse {
    #[serde(rename = "_links", default, skip_serializing_if = "Option::is_none")]
    pub links: Option<HalLinks>,
    #[serde(rename = "_embedded", default)]
    pub embedded: EmbeddedEnvironments,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmbeddedEnvironments {
    #[serde(default)]
    pub environments: Vec<Environment>,
}

impl EnvironmentsResponse {
    /// Environments in server order.
    pub fn environments(&self) -> &[Environment] {
        &self.embedded.environments
    }
}

/// A group of pipelines and agents sharing environment variables.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Environment {
    #[serde(rename = "_links", default, skip_serializing_if = "Option::is_none")]
    pub links: Option<HalLinks>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub pipelines: Vec<Pipeline>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub agents: Vec<Agent>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub environment_variables: Vec<EnvironmentVariable>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

impl Environment {
    /// Minimal record accepted by the create endpoint.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

/// A plain or secure variable attached to an environment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvironmentVariable {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encrypted_value: Option<String>,
    #[serde(default)]
    pub secure: bool,
}

impl EnvironmentVariable {
    pub fn plain(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: Some(value.into()),
            encrypted_value: None,
            secure: false,
        }
    }

    pub fn secure(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: Some(value.into()),
            encrypted_value: None,
            secure: true,
        }
    }
}

/// Patch action over environment variables.
pub type EnvironmentVariablesAction = PatchAction<EnvironmentVariable>;

/// Body for `PATCH admin/environments/{name}`.
///
/// All three keys are always present, each with an `add` and `remove` set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvironmentPatchRequest {
    #[serde(default)]
    pub pipelines: PatchStringAction,
    #[serde(default)]
    pub agents: PatchStringAction,
    #[serde(default)]
    pub environment_variables: EnvironmentVariablesAction,
}

impl EnvironmentPatchRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_pipeline(mut self, name: impl Into<String>) -> Self {
        self.pipelines.add.push(name.into());
        self
    }

    pub fn remove_pipeline(mut self, name: impl Into<String>) -> Self {
        self.pipelines.remove.push(name.into());
        self
    }

    pub fn add_agent(mut self, uuid: impl Into<String>) -> Self {
        self.agents.add.push(uuid.into());
        self
    }

    pub fn remove_agent(mut self, uuid: impl Into<String>) -> Self {
        self.agents.remove.push(uuid.into());
        self
    }

    pub fn add_environment_variable(mut self, variable: EnvironmentVariable) -> Self {
        self.environment_variables.add.push(variable);
        self
    }

    pub fn remove_environment_variable(mut self, variable: EnvironmentVariable) -> Self {
        self.environment_variables.remove.push(variable);
        self
    }
}

impl RemoveLinks for EnvironmentsResponse {
    fn remove_links(&mut self) {
        self.links = None;
        self.embedded.environments.remove_links();
    }
}

impl RemoveLinks for Environment {
    fn remove_links(&mut self) {
        self.links = None;
        self.pipelines.remove_links();
        self.agents.remove_links();
    }
}
