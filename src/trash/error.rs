use thiserror::Error;

use crate::node::NodeId;
use crate::store::StoreError;

/// Errors raised by trash operations.
#[derive(Error, Debug)]
pub enum TrashError {
    #[error("Trash is disabled")]
    Disabled,

    #[error("Trash configuration error: {0}")]
    Configuration(String),

    #[error("Node {node} cannot be thrown: {reason}")]
    NotThrowable { node: NodeId, reason: &'static str },

    #[error("Node is already in the trash: {0}")]
    AlreadyTrashed(NodeId),

    #[error("Node is not in the trash: {0}")]
    NotTrashed(NodeId),

    #[error("Node is in the trash but carries no restore snapshot: {0}")]
    CorruptedSnapshot(NodeId),

    #[error("Former parent {parent} of node {node} no longer exists")]
    FormerParentMissing { node: NodeId, parent: NodeId },

    #[error("Former parent {parent} of node {node} is itself in the trash")]
    FormerParentInTrash { node: NodeId, parent: NodeId },

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl TrashError {
    /// Create a configuration error with a message
    pub fn configuration(msg: impl Into<String>) -> Self {
        TrashError::Configuration(msg.into())
    }

    /// Whether the error reflects the node's trash state rather than the
    /// environment; the caller may recover by re-fetching the node.
    #[must_use]
    pub fn is_state_error(&self) -> bool {
        matches!(
            self,
            TrashError::AlreadyTrashed(_)
                | TrashError::NotTrashed(_)
                | TrashError::CorruptedSnapshot(_)
                | TrashError::FormerParentMissing { .. }
                | TrashError::FormerParentInTrash { .. }
        )
    }
}
