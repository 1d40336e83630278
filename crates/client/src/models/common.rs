//! HAL envelope types shared across GoCD resources.
//!
//! GoCD wraps navigation metadata in a `_links` object whose entries are
//! `{"href": "..."}` objects. The links are only used for navigation; write
//! endpoints reject payloads that still carry them, hence [`RemoveLinks`].

use serde::{Deserialize, Serialize};
use url::Url;

/// A single HAL link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HalLink {
    pub href: Url,
}

/// The `_links` block of a GoCD resource.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HalLinks {
    #[serde(rename = "self", default, skip_serializing_if = "Option::is_none")]
    pub self_link: Option<HalLink>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc: Option<HalLink>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub find: Option<HalLink>,
}

impl HalLinks {
    pub fn self_url(&self) -> Option<&Url> {
        self.self_link.as_ref().map(|l| &l.href)
    }

    pub fn doc_url(&self) -> Option<&Url> {
        self.doc.as_ref().map(|l| &l.href)
    }

    pub fn find_url(&self) -> Option<&Url> {
        self.find.as_ref().map(|l| &l.href)
    }
}

/// Strip server-populated `_links` from a record and all of its children so
/// it can be submitted back to a write endpoint.
///
/// Implementations must be idempotent.
pub trait RemoveLinks {
    fn remove_links(&mut self);
}

impl<T: RemoveLinks> RemoveLinks for [T] {
    fn remove_links(&mut self) {
        for item in self {
            item.remove_links();
        }
    }
}
