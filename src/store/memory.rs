//! In-memory node store.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use super::{NodeStore, StoreError};
use crate::node::{ContentNode, NodeId};

/// Thread-safe node store kept entirely in memory.
#[derive(Debug, Default)]
pub struct MemoryNodeStore {
    nodes: RwLock<HashMap<NodeId, ContentNode>>,
}

impl MemoryNodeStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored nodes
    pub async fn len(&self) -> usize {
        self.nodes.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.nodes.read().await.is_empty()
    }
}

/// Whether `ancestor` appears on the parent chain starting at `start` (inclusive).
fn chain_contains(nodes: &HashMap<NodeId, ContentNode>, start: NodeId, ancestor: NodeId) -> bool {
    let mut current = Some(start);
    let mut steps = 0usize;
    while let Some(id) = current {
        if id == ancestor {
            return true;
        }
        // a corrupt chain must not spin forever
        if steps > nodes.len() {
            return true;
        }
        steps = steps.saturating_add(1);
        current = nodes.get(&id).and_then(|node| node.parent);
    }
    false
}

fn unlink(nodes: &mut HashMap<NodeId, ContentNode>, child: NodeId, parent: Option<NodeId>) {
    if let Some(parent) = parent.and_then(|id| nodes.get_mut(&id)) {
        parent.children.retain(|id| *id != child);
    }
}

fn link(nodes: &mut HashMap<NodeId, ContentNode>, child: NodeId, parent: NodeId) {
    if let Some(parent) = nodes.get_mut(&parent) {
        if !parent.children.contains(&child) {
            parent.children.push(child);
        }
    }
}

/// Move `id` under `destination`, keeping both children lists consistent.
fn relink(
    nodes: &mut HashMap<NodeId, ContentNode>,
    id: NodeId,
    destination: NodeId,
) -> Result<(), StoreError> {
    if !nodes.contains_key(&destination) {
        return Err(StoreError::NotFound(destination));
    }
    if chain_contains(nodes, destination, id) {
        return Err(StoreError::InvalidMove {
            node: id,
            destination,
        });
    }
    let old_parent = nodes
        .get(&id)
        .ok_or(StoreError::NotFound(id))?
        .parent;
    unlink(nodes, id, old_parent);
    link(nodes, id, destination);
    if let Some(stored) = nodes.get_mut(&id) {
        stored.parent = Some(destination);
    }
    Ok(())
}

fn collect_subtree(nodes: &HashMap<NodeId, ContentNode>, id: NodeId, out: &mut Vec<NodeId>) {
    out.push(id);
    if let Some(node) = nodes.get(&id) {
        for child in &node.children {
            if !out.contains(child) {
                collect_subtree(nodes, *child, out);
            }
        }
    }
}

#[async_trait]
impl NodeStore for MemoryNodeStore {
    async fn get(&self, id: &NodeId) -> Result<Option<ContentNode>, StoreError> {
        Ok(self.nodes.read().await.get(id).cloned())
    }

    async fn save(&self, node: &ContentNode) -> Result<(), StoreError> {
        let mut nodes = self.nodes.write().await;
        if let Some(parent) = node.parent {
            if !nodes.contains_key(&parent) {
                return Err(StoreError::NotFound(parent));
            }
        }

        let Some(previous_parent) = nodes.get(&node.id).map(|existing| existing.parent) else {
            let mut record = node.clone();
            record.children = Vec::new();
            nodes.insert(record.id, record);
            if let Some(parent) = node.parent {
                link(&mut nodes, node.id, parent);
            }
            return Ok(());
        };

        if previous_parent != node.parent {
            match node.parent {
                Some(parent) => relink(&mut nodes, node.id, parent)?,
                None => unlink(&mut nodes, node.id, previous_parent),
            }
        }
        if let Some(stored) = nodes.get_mut(&node.id) {
            let children = std::mem::take(&mut stored.children);
            *stored = ContentNode {
                children,
                ..node.clone()
            };
        }
        Ok(())
    }

    async fn move_node(
        &self,
        node: &mut ContentNode,
        new_parent: &NodeId,
    ) -> Result<(), StoreError> {
        let mut nodes = self.nodes.write().await;
        relink(&mut nodes, node.id, *new_parent)?;
        node.parent = Some(*new_parent);
        Ok(())
    }

    async fn delete(&self, id: &NodeId) -> Result<(), StoreError> {
        let mut nodes = self.nodes.write().await;
        let parent = nodes.get(id).ok_or(StoreError::NotFound(*id))?.parent;
        unlink(&mut nodes, *id, parent);
        let mut subtree = Vec::new();
        collect_subtree(&nodes, *id, &mut subtree);
        for node_id in subtree {
            nodes.remove(&node_id);
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "memory_tests.rs"]
mod tests;
