//! Site root and trash container resolution.

use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::debug;

use super::error::TrashError;
use crate::node::{ContentNode, NodeId};
use crate::store::NodeStore;

/// Name given to trash containers created on demand
pub const DEFAULT_CONTAINER_NAME: &str = "Trash";

/// Finds the site root a node belongs to.
#[async_trait]
pub trait RootResolver: Send + Sync {
    async fn resolve_root(&self, node: &ContentNode) -> Result<ContentNode, TrashError>;
}

/// Finds or lazily creates the trash container of a site root.
#[async_trait]
pub trait ContainerFactory: Send + Sync {
    /// Look up the existing container without creating one
    async fn find(&self, root: &NodeId) -> Result<Option<ContentNode>, TrashError>;

    /// Return the existing container or create and persist a new one
    async fn find_or_create(&self, root: &NodeId) -> Result<ContentNode, TrashError>;
}

/// Resolves the root by walking the node's parent chain to the top.
pub struct AncestorRootResolver {
    store: Arc<dyn NodeStore>,
}

impl AncestorRootResolver {
    #[must_use]
    pub fn new(store: Arc<dyn NodeStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl RootResolver for AncestorRootResolver {
    async fn resolve_root(&self, node: &ContentNode) -> Result<ContentNode, TrashError> {
        let mut visited = HashSet::from([node.id]);
        let mut current = node.clone();
        while let Some(parent_id) = current.parent {
            if !visited.insert(parent_id) {
                return Err(TrashError::configuration(format!(
                    "parent chain of node {} loops at {parent_id}",
                    node.id
                )));
            }
            current = self.store.get(&parent_id).await?.ok_or_else(|| {
                TrashError::configuration(format!(
                    "ancestor {parent_id} of node {} does not exist",
                    node.id
                ))
            })?;
        }
        Ok(current)
    }
}

/// Resolves every node to one configured site root.
///
/// The configured root must be the node itself or one of its ancestors;
/// nodes from other trees are a configuration error.
pub struct FixedRootResolver {
    store: Arc<dyn NodeStore>,
    root: NodeId,
}

impl FixedRootResolver {
    #[must_use]
    pub fn new(store: Arc<dyn NodeStore>, root: NodeId) -> Self {
        Self { store, root }
    }

    async fn is_under_root(&self, node: &ContentNode) -> Result<bool, TrashError> {
        if node.id == self.root {
            return Ok(true);
        }
        let mut visited = HashSet::from([node.id]);
        let mut next = node.parent;
        while let Some(id) = next {
            if id == self.root {
                return Ok(true);
            }
            if !visited.insert(id) {
                break;
            }
            next = self.store.get(&id).await?.and_then(|ancestor| ancestor.parent);
        }
        Ok(false)
    }
}

#[async_trait]
impl RootResolver for FixedRootResolver {
    async fn resolve_root(&self, node: &ContentNode) -> Result<ContentNode, TrashError> {
        let root = self.store.get(&self.root).await?.ok_or_else(|| {
            TrashError::configuration(format!("site root {} does not exist", self.root))
        })?;
        if !self.is_under_root(node).await? {
            return Err(TrashError::configuration(format!(
                "node {} is not below site root {}",
                node.id, self.root
            )));
        }
        Ok(root)
    }
}

/// Keeps the trash container as a direct child of the site root.
pub struct StoreContainerFactory {
    store: Arc<dyn NodeStore>,
    name: String,
}

impl StoreContainerFactory {
    #[must_use]
    pub fn new(store: Arc<dyn NodeStore>) -> Self {
        Self::with_name(store, DEFAULT_CONTAINER_NAME)
    }

    #[must_use]
    pub fn with_name(store: Arc<dyn NodeStore>, name: impl Into<String>) -> Self {
        Self {
            store,
            name: name.into(),
        }
    }
}

#[async_trait]
impl ContainerFactory for StoreContainerFactory {
    async fn find(&self, root: &NodeId) -> Result<Option<ContentNode>, TrashError> {
        let root = self.store.get(root).await?.ok_or_else(|| {
            TrashError::configuration(format!("site root {root} does not exist"))
        })?;
        Ok(self
            .store
            .children_of(&root)
            .await?
            .into_iter()
            .find(ContentNode::is_trash_container))
    }

    async fn find_or_create(&self, root: &NodeId) -> Result<ContentNode, TrashError> {
        if let Some(container) = self.find(root).await? {
            return Ok(container);
        }
        let container = ContentNode::trash_container(self.name.clone()).with_parent(*root);
        self.store.save(&container).await?;
        debug!("Created trash container {} under root {}", container.id, root);
        Ok(container)
    }
}

#[cfg(test)]
#[path = "resolver_tests.rs"]
mod tests;
