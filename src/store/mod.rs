//! Node persistence contract consumed by the trash subsystem.
//!
//! The trash coordinator never touches storage directly; every read and
//! write goes through a [`NodeStore`]. Each call is expected to be atomic
//! from the caller's point of view.

pub mod memory;

use async_trait::async_trait;
use thiserror::Error;

use crate::node::{ContentNode, NodeId};

pub use memory::MemoryNodeStore;

/// Errors raised by a node store.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Node not found: {0}")]
    NotFound(NodeId),

    #[error("Cannot move node {node} under {destination}")]
    InvalidMove { node: NodeId, destination: NodeId },

    #[error("Store backend error: {0}")]
    Backend(String),
}

/// Hierarchical node persistence.
#[async_trait]
pub trait NodeStore: Send + Sync {
    /// Get a detached copy of a node by id
    async fn get(&self, id: &NodeId) -> Result<Option<ContentNode>, StoreError>;

    /// Insert or update a node's own fields.
    ///
    /// A new node is appended to its parent's children. The children list of
    /// an existing node is owned by the store and is left as stored.
    async fn save(&self, node: &ContentNode) -> Result<(), StoreError>;

    /// Re-parent a node, updating `node.parent` on the caller's copy.
    async fn move_node(&self, node: &mut ContentNode, new_parent: &NodeId)
        -> Result<(), StoreError>;

    /// Permanently remove a node and its subtree
    async fn delete(&self, id: &NodeId) -> Result<(), StoreError>;

    /// Get a node, failing with `NotFound` if it does not exist
    async fn get_required(&self, id: &NodeId) -> Result<ContentNode, StoreError> {
        self.get(id).await?.ok_or(StoreError::NotFound(*id))
    }

    /// Get the direct children of a node, in order
    async fn children_of(&self, node: &ContentNode) -> Result<Vec<ContentNode>, StoreError> {
        let mut children = Vec::with_capacity(node.children.len());
        for child_id in &node.children {
            children.push(self.get_required(child_id).await?);
        }
        Ok(children)
    }
}
