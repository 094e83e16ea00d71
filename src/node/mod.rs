//! Content node model consumed by the trash subsystem.
//!
//! Nodes form a tree through `parent` references. The store owns the
//! `children` lists; a node fetched from the store is a detached copy that
//! the caller mutates and hands back for saving.

pub mod id;
pub mod snapshot;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub use id::NodeId;
pub use snapshot::{TrashSnapshot, DELETED_DATE, FORMER_EXPIRES, FORMER_NAME, FORMER_PARENT};

/// Node type discriminator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NodeKind {
    /// Ordinary content
    #[default]
    Content,
    /// Holding area for thrown nodes
    TrashContainer,
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NodeKind::Content => write!(f, "content"),
            NodeKind::TrashContainer => write!(f, "trash-container"),
        }
    }
}

/// A hierarchical content entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentNode {
    pub id: NodeId,
    /// Lookup/display name, non-empty while the node is active
    pub name: String,
    #[serde(default)]
    pub kind: NodeKind,
    /// Containing node; `None` only for a root
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<NodeId>,
    /// Ordered child ids, maintained by the store
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NodeId>,
    /// Time at/after which the node may be permanently removed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires: Option<DateTime<Utc>>,
    /// Present while the node sits in the trash as a thrown item
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trash: Option<TrashSnapshot>,
}

impl ContentNode {
    /// Create a detached content node with a fresh id
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: NodeId::new(),
            name: name.into(),
            kind: NodeKind::Content,
            parent: None,
            children: Vec::new(),
            expires: None,
            trash: None,
        }
    }

    /// Create a detached trash container node
    #[must_use]
    pub fn trash_container(name: impl Into<String>) -> Self {
        Self {
            kind: NodeKind::TrashContainer,
            ..Self::new(name)
        }
    }

    /// Set the parent reference
    #[must_use]
    pub fn with_parent(mut self, parent: NodeId) -> Self {
        self.parent = Some(parent);
        self
    }

    /// Set the expiry
    #[must_use]
    pub fn with_expires(mut self, expires: DateTime<Utc>) -> Self {
        self.expires = Some(expires);
        self
    }

    #[must_use]
    pub fn is_trash_container(&self) -> bool {
        self.kind == NodeKind::TrashContainer
    }

    /// Whether the node carries a former-state snapshot
    #[must_use]
    pub fn is_thrown(&self) -> bool {
        self.trash.is_some()
    }

    #[must_use]
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}
