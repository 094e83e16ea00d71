//! Throw/restore orchestration.
//!
//! A node is either active (no snapshot, normal parent) or thrown (snapshot
//! present, parent is a trash container, `expires` set). Throwing moves only
//! the node itself; its descendants travel with it and just get their own
//! expiry stamped so a sweep can act on each of them independently.

use chrono::{DateTime, Utc};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

use super::error::TrashError;
use super::expiry::{ExpiryPolicy, FixedRetention};
use super::resolver::{
    AncestorRootResolver, ContainerFactory, FixedRootResolver, RootResolver,
    StoreContainerFactory,
};
use crate::config::TrashConfig;
use crate::hooks::{HookContext, HookHandle, HookRegistry, Phase, TrashOperation};
use crate::node::{ContentNode, NodeId, TrashSnapshot};
use crate::store::NodeStore;

/// How a throw or restore call ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrashOutcome {
    /// The state transition happened and was persisted
    Completed,
    /// A pre-hook vetoed the operation; nothing was changed
    Cancelled,
}

/// Soft-deletes nodes into a per-site trash container and restores them.
///
/// Holds no state beyond its collaborators and registered hooks. Calls on the
/// same node must be serialized by the caller.
pub struct TrashCoordinator {
    store: Arc<dyn NodeStore>,
    roots: Arc<dyn RootResolver>,
    containers: Arc<dyn ContainerFactory>,
    expiry: Arc<dyn ExpiryPolicy>,
    hooks: HookRegistry,
    enabled: bool,
}

impl TrashCoordinator {
    /// Coordinator with ancestor-based root resolution, a "Trash" container
    /// and the default retention.
    #[must_use]
    pub fn new(store: Arc<dyn NodeStore>) -> Self {
        Self {
            roots: Arc::new(AncestorRootResolver::new(Arc::clone(&store))),
            containers: Arc::new(StoreContainerFactory::new(Arc::clone(&store))),
            expiry: Arc::new(FixedRetention::default()),
            hooks: HookRegistry::new(),
            enabled: true,
            store,
        }
    }

    /// Coordinator wired from a [`TrashConfig`].
    #[must_use]
    pub fn from_config(store: Arc<dyn NodeStore>, config: &TrashConfig) -> Self {
        let roots: Arc<dyn RootResolver> = match config.site_root_id {
            Some(root) => Arc::new(FixedRootResolver::new(Arc::clone(&store), root)),
            None => Arc::new(AncestorRootResolver::new(Arc::clone(&store))),
        };
        let containers = Arc::new(StoreContainerFactory::with_name(
            Arc::clone(&store),
            config.container_name.clone(),
        ));
        Self::new(store)
            .with_root_resolver(roots)
            .with_container_factory(containers)
            .with_expiry_policy(Arc::new(FixedRetention::days(config.retention_days)))
            .with_enabled(config.enabled)
    }

    #[must_use]
    pub fn with_root_resolver(mut self, roots: Arc<dyn RootResolver>) -> Self {
        self.roots = roots;
        self
    }

    #[must_use]
    pub fn with_container_factory(mut self, containers: Arc<dyn ContainerFactory>) -> Self {
        self.containers = containers;
        self
    }

    #[must_use]
    pub fn with_expiry_policy(mut self, expiry: Arc<dyn ExpiryPolicy>) -> Self {
        self.expiry = expiry;
        self
    }

    /// Turn throwing on or off. Restore keeps working while disabled.
    #[must_use]
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    #[must_use]
    pub fn expiry_policy(&self) -> &dyn ExpiryPolicy {
        self.expiry.as_ref()
    }

    pub fn hooks_mut(&mut self) -> &mut HookRegistry {
        &mut self.hooks
    }

    /// Register a cancellable hook raised before a node is thrown.
    pub fn on_throwing<F>(&mut self, hook: F) -> HookHandle
    where
        F: Fn(&mut HookContext<'_>) + Send + Sync + 'static,
    {
        self.hooks.on_before(TrashOperation::Throw, hook)
    }

    /// Register a hook raised after a node was thrown.
    pub fn on_thrown<F>(&mut self, hook: F) -> HookHandle
    where
        F: Fn(&HookContext<'_>) + Send + Sync + 'static,
    {
        self.hooks.on_after(TrashOperation::Throw, hook)
    }

    /// Register a cancellable hook raised before a node is restored.
    pub fn on_restoring<F>(&mut self, hook: F) -> HookHandle
    where
        F: Fn(&mut HookContext<'_>) + Send + Sync + 'static,
    {
        self.hooks.on_before(TrashOperation::Restore, hook)
    }

    /// Register a hook raised after a node was restored.
    pub fn on_restored<F>(&mut self, hook: F) -> HookHandle
    where
        F: Fn(&HookContext<'_>) + Send + Sync + 'static,
    {
        self.hooks.on_after(TrashOperation::Restore, hook)
    }

    pub fn remove_hook(&mut self, handle: HookHandle) -> bool {
        self.hooks.remove(handle)
    }

    /// Move `node` into its site's trash container.
    ///
    /// Snapshots the former name, parent and expiry, stamps an expiry on the
    /// node and every descendant, renames the node to its id and persists the
    /// result. Preconditions are checked before any pre-hook runs. Returns
    /// `Cancelled` without touching anything if a pre-hook vetoes. On a store
    /// failure the in-memory node is left mutated and must be re-fetched
    /// before retrying.
    #[instrument(skip_all, fields(node_id = %node.id))]
    pub async fn throw(&self, node: &mut ContentNode) -> Result<TrashOutcome, TrashError> {
        let (root, former_parent) = self.validate_throw(node).await.inspect_err(|e| {
            warn!("Refusing to throw '{}': {}", node.name, e);
        })?;

        let mut ctx = HookContext::new(Phase::Pre, TrashOperation::Throw, node);
        self.hooks.run_pre(&mut ctx);
        if ctx.is_cancelled() {
            info!("Throw of '{}' cancelled by hook", node.name);
            return Ok(TrashOutcome::Cancelled);
        }

        let container = self.containers.find_or_create(&root.id).await?;
        let mut descendants = self.descendants_of(node).await?;

        let now = Utc::now();
        node.trash = Some(TrashSnapshot {
            former_name: node.name.clone(),
            former_parent,
            former_expires: node.expires,
            deleted_at: now,
        });
        for descendant in &mut descendants {
            descendant.expires = Some(self.expiry.expires_at(now));
        }
        node.name = node.id.to_string();
        node.expires = Some(self.expiry.expires_at(now));

        self.store.move_node(node, &container.id).await?;
        self.store.save(node).await?;
        for descendant in &descendants {
            self.store.save(descendant).await?;
        }
        debug!("Stamped expiry on {} descendants", descendants.len());
        info!("Threw node {} into trash container {}", node.id, container.id);

        self.hooks
            .run_post(&HookContext::new(Phase::Post, TrashOperation::Throw, node));
        Ok(TrashOutcome::Completed)
    }

    /// Return a thrown `node` to its former parent, name and expiry.
    ///
    /// Descendants get their expiry cleared. Fails with `NotTrashed` when the
    /// node was never thrown and `CorruptedSnapshot` when it sits directly in
    /// a trash container without a snapshot; neither touches the store.
    #[instrument(skip_all, fields(node_id = %node.id))]
    pub async fn restore(&self, node: &mut ContentNode) -> Result<TrashOutcome, TrashError> {
        let Some(snapshot) = node.trash.clone() else {
            let err = if self.is_directly_in_trash(node).await? {
                TrashError::CorruptedSnapshot(node.id)
            } else {
                TrashError::NotTrashed(node.id)
            };
            warn!("Refusing to restore node {}: {}", node.id, err);
            return Err(err);
        };

        let mut ctx = HookContext::new(Phase::Pre, TrashOperation::Restore, node);
        self.hooks.run_pre(&mut ctx);
        if ctx.is_cancelled() {
            info!("Restore of node {} cancelled by hook", node.id);
            return Ok(TrashOutcome::Cancelled);
        }

        let former_parent = self
            .store
            .get(&snapshot.former_parent)
            .await?
            .ok_or(TrashError::FormerParentMissing {
                node: node.id,
                parent: snapshot.former_parent,
            })?;
        if self.is_in_trash(&former_parent).await? {
            return Err(TrashError::FormerParentInTrash {
                node: node.id,
                parent: former_parent.id,
            });
        }
        let mut descendants = self.descendants_of(node).await?;

        for descendant in &mut descendants {
            descendant.expires = None;
        }
        node.name = snapshot.former_name;
        self.store.move_node(node, &former_parent.id).await?;
        node.expires = snapshot.former_expires;
        node.trash = None;
        self.store.save(node).await?;
        for descendant in &descendants {
            self.store.save(descendant).await?;
        }
        info!("Restored '{}' under {}", node.name, former_parent.id);

        self.hooks
            .run_post(&HookContext::new(Phase::Post, TrashOperation::Restore, node));
        Ok(TrashOutcome::Completed)
    }

    /// Whether `throw` would be accepted for `node`, hooks aside.
    ///
    /// Store failures are returned as errors rather than folded into `false`.
    pub async fn can_throw(&self, node: &ContentNode) -> Result<bool, TrashError> {
        match self.validate_throw(node).await {
            Ok(_) => Ok(true),
            Err(TrashError::Store(e)) => Err(TrashError::Store(e)),
            Err(_) => Ok(false),
        }
    }

    /// Whether `restore` would be accepted for `node`, hooks aside.
    pub async fn can_restore(&self, node: &ContentNode) -> Result<bool, TrashError> {
        let Some(snapshot) = &node.trash else {
            return Ok(false);
        };
        match self.store.get(&snapshot.former_parent).await? {
            Some(parent) => Ok(!self.is_in_trash(&parent).await?),
            None => Ok(false),
        }
    }

    /// Whether `node` is a trash container or sits anywhere below one.
    pub async fn is_in_trash(&self, node: &ContentNode) -> Result<bool, TrashError> {
        if node.is_trash_container() {
            return Ok(true);
        }
        let mut visited = HashSet::from([node.id]);
        let mut next = node.parent;
        while let Some(id) = next {
            if !visited.insert(id) {
                break;
            }
            let Some(ancestor) = self.store.get(&id).await? else {
                break;
            };
            if ancestor.is_trash_container() {
                return Ok(true);
            }
            next = ancestor.parent;
        }
        Ok(false)
    }

    /// Items thrown under the given site root, in the order they were thrown.
    ///
    /// Never creates the container.
    pub async fn list_trashed(&self, root: &NodeId) -> Result<Vec<ContentNode>, TrashError> {
        match self.containers.find(root).await? {
            Some(container) => Ok(self.store.children_of(&container).await?),
            None => Ok(Vec::new()),
        }
    }

    /// Thrown items under the given root whose expiry has passed at `now`.
    pub async fn expired_in_trash(
        &self,
        root: &NodeId,
        now: DateTime<Utc>,
    ) -> Result<Vec<ContentNode>, TrashError> {
        Ok(self
            .list_trashed(root)
            .await?
            .into_iter()
            .filter(|node| {
                node.expires
                    .is_some_and(|expires| self.expiry.is_expired(expires, now))
            })
            .collect())
    }

    fn check_throwable(&self, node: &ContentNode) -> Result<(), TrashError> {
        if !self.enabled {
            return Err(TrashError::Disabled);
        }
        if node.is_trash_container() {
            return Err(TrashError::NotThrowable {
                node: node.id,
                reason: "node is a trash container",
            });
        }
        if node.is_root() {
            return Err(TrashError::NotThrowable {
                node: node.id,
                reason: "node is a site root",
            });
        }
        if node.is_thrown() {
            return Err(TrashError::AlreadyTrashed(node.id));
        }
        Ok(())
    }

    /// Every read-only precondition of a throw. Returns the site root and
    /// the parent the node is thrown from.
    async fn validate_throw(
        &self,
        node: &ContentNode,
    ) -> Result<(ContentNode, NodeId), TrashError> {
        self.check_throwable(node)?;
        let root = self.roots.resolve_root(node).await?;
        let former_parent = match node.parent {
            Some(parent) if root.id != node.id => parent,
            _ => {
                return Err(TrashError::NotThrowable {
                    node: node.id,
                    reason: "node is a site root",
                })
            }
        };
        if self.is_in_trash(node).await? {
            return Err(TrashError::AlreadyTrashed(node.id));
        }
        Ok((root, former_parent))
    }

    async fn is_directly_in_trash(&self, node: &ContentNode) -> Result<bool, TrashError> {
        let Some(parent) = node.parent else {
            return Ok(false);
        };
        Ok(self
            .store
            .get(&parent)
            .await?
            .is_some_and(|parent| parent.is_trash_container()))
    }

    /// Every node below `node`, depth-first. Children come from the stored
    /// copy when there is one, since the caller's copy may be stale.
    async fn descendants_of(&self, node: &ContentNode) -> Result<Vec<ContentNode>, TrashError> {
        let stored = self.store.get(&node.id).await?;
        let mut seen = HashSet::from([node.id]);
        let mut found = Vec::new();
        let mut pending = self
            .store
            .children_of(stored.as_ref().unwrap_or(node))
            .await?;
        while let Some(child) = pending.pop() {
            if !seen.insert(child.id) {
                continue;
            }
            pending.extend(self.store.children_of(&child).await?);
            found.push(child);
        }
        Ok(found)
    }
}

#[cfg(test)]
#[path = "coordinator_tests.rs"]
mod tests;
