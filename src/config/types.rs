use serde::{Deserialize, Serialize};

use crate::node::NodeId;
use crate::trash::{FixedRetention, DEFAULT_CONTAINER_NAME};

/// Default: trash enabled
pub fn default_enabled() -> bool {
    true
}

/// Default retention period in days
pub fn default_retention_days() -> u32 {
    FixedRetention::DEFAULT_DAYS
}

/// Default name of lazily created trash containers
pub fn default_container_name() -> String {
    DEFAULT_CONTAINER_NAME.to_string()
}

/// Trash configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrashConfig {
    /// When false, nodes cannot be thrown and callers should delete outright.
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Days a thrown node is kept before it counts as expired.
    #[serde(default = "default_retention_days")]
    pub retention_days: u32,
    /// Name given to trash containers created on demand.
    #[serde(default = "default_container_name")]
    pub container_name: String,
    /// Fixed site root for every node. `None` means walk each node's ancestors.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub site_root_id: Option<NodeId>,
}

impl Default for TrashConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            retention_days: default_retention_days(),
            container_name: default_container_name(),
            site_root_id: None,
        }
    }
}
