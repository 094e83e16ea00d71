//! Common test utilities
#![allow(dead_code)] // Shared helpers; not every test binary uses every item

use async_trait::async_trait;
use content_trash::{ContentNode, MemoryNodeStore, NodeId, NodeStore, StoreError};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

/// Store wrapper that counts mutating calls and can be told to fail saves.
#[derive(Default)]
pub struct RecordingStore {
    inner: MemoryNodeStore,
    saves: AtomicUsize,
    moves: AtomicUsize,
    deletes: AtomicUsize,
    fail_saves: AtomicBool,
}

#[allow(dead_code)] // Not every integration test uses every helper
impl RecordingStore {
    pub fn saves(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }

    pub fn moves(&self) -> usize {
        self.moves.load(Ordering::SeqCst)
    }

    pub fn deletes(&self) -> usize {
        self.deletes.load(Ordering::SeqCst)
    }

    /// Total number of mutating calls
    pub fn mutations(&self) -> usize {
        self.saves() + self.moves() + self.deletes()
    }

    pub fn reset_counts(&self) {
        self.saves.store(0, Ordering::SeqCst);
        self.moves.store(0, Ordering::SeqCst);
        self.deletes.store(0, Ordering::SeqCst);
    }

    pub fn fail_saves(&self, fail: bool) {
        self.fail_saves.store(fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl NodeStore for RecordingStore {
    async fn get(&self, id: &NodeId) -> Result<Option<ContentNode>, StoreError> {
        self.inner.get(id).await
    }

    async fn save(&self, node: &ContentNode) -> Result<(), StoreError> {
        self.saves.fetch_add(1, Ordering::SeqCst);
        if self.fail_saves.load(Ordering::SeqCst) {
            return Err(StoreError::Backend("disk full".to_string()));
        }
        self.inner.save(node).await
    }

    async fn move_node(
        &self,
        node: &mut ContentNode,
        new_parent: &NodeId,
    ) -> Result<(), StoreError> {
        self.moves.fetch_add(1, Ordering::SeqCst);
        self.inner.move_node(node, new_parent).await
    }

    async fn delete(&self, id: &NodeId) -> Result<(), StoreError> {
        self.deletes.fetch_add(1, Ordering::SeqCst);
        self.inner.delete(id).await
    }
}

/// A site with a root (named "root") and one page named "item" below it.
pub struct Site {
    pub store: Arc<RecordingStore>,
    pub root: ContentNode,
    pub item: ContentNode,
}

#[allow(dead_code)] // Not every integration test uses every helper
impl Site {
    /// Persist a new child under `parent` and return the stored copy
    pub async fn add_child(&self, parent: &NodeId, name: &str) -> ContentNode {
        let node = ContentNode::new(name).with_parent(*parent);
        self.store.save(&node).await.expect("Failed to save child");
        self.store
            .get_required(&node.id)
            .await
            .expect("Child should exist")
    }

    /// Fresh copy of a node from the store
    pub async fn fetch(&self, id: &NodeId) -> ContentNode {
        self.store.get_required(id).await.expect("Node should exist")
    }
}

/// Build a site and reset the call counters
pub async fn create_site() -> Site {
    let store = Arc::new(RecordingStore::default());
    let root = ContentNode::new("root");
    store.save(&root).await.expect("Failed to save root");
    let item = ContentNode::new("item").with_parent(root.id);
    store.save(&item).await.expect("Failed to save item");
    let item = store
        .get_required(&item.id)
        .await
        .expect("Item should exist");
    let root = store
        .get_required(&root.id)
        .await
        .expect("Root should exist");
    store.reset_counts();
    Site { store, root, item }
}
