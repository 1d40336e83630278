//! Server version model for `GET api/version`.

use serde::{Deserialize, Serialize};

use super::common::HalLinks;

/// Server build metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Version {
    #[serde(rename = "_links", default)]
    pub links: HalLinks,
    pub version: String,
    pub build_number: String,
    pub git_sha: String,
    pub full_version: String,
    pub commit_url: String,
}
