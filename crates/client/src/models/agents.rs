//! Agent records as embedded in environment responses.

use serde::{Deserialize, Serialize};

use super::common::{HalLinks, RemoveLinks};

/// A build agent.
///
/// Environment responses embed agents with little more than their links and
/// UUID; the remaining fields are populated by the full agent endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Agent {
    #[serde(rename = "_links", default, skip_serializing_if = "Option::is_none")]
    pub links: Option<HalLinks>,
    pub uuid: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sandbox: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operating_system: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent_config_state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent_state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub build_state: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub resources: Vec<String>,
}

impl RemoveLinks for Agent {
    fn remove_links(&mut self) {
        self.links = None;
    }
}
