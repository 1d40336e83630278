//! Add/remove patch documents.

use serde::{Deserialize, Serialize};

/// Incremental change to a sub-collection: items to add and items to remove.
///
/// Both arrays are always serialized, empty when unset, because the server
/// treats a missing or null set as a malformed patch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatchAction<T> {
    #[serde(default)]
    pub add: Vec<T>,
    #[serde(default)]
    pub remove: Vec<T>,
}

impl<T> Default for PatchAction<T> {
    fn default() -> Self {
        Self {
            add: Vec::new(),
            remove: Vec::new(),
        }
    }
}

impl<T> PatchAction<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(mut self, item: T) -> Self {
        self.add.push(item);
        self
    }

    pub fn remove(mut self, item: T) -> Self {
        self.remove.push(item);
        self
    }

    /// True when the action changes nothing.
    pub fn is_empty(&self) -> bool {
        self.add.is_empty() && self.remove.is_empty()
    }
}

/// Patch action over string identifiers (pipeline names, agent UUIDs).
pub type PatchStringAction = PatchAction<String>;
