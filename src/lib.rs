//! Reversible soft-delete ("trash") for hierarchical content stores.
//!
//! Thrown nodes are moved into a per-site trash container, stamped with an
//! expiry and carry a snapshot of their former name, parent and expiry so
//! they can be restored later. Persistence is delegated to a [`NodeStore`].

// Allow panic/unwrap/expect in tests (denied globally via Cargo.toml lints)
#![cfg_attr(
    test,
    allow(
        clippy::panic,
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic_in_result_fn,
        clippy::unwrap_in_result,
        clippy::arithmetic_side_effects,
        clippy::indexing_slicing
    )
)]

pub mod config;
pub mod hooks;
pub mod logging;
pub mod node;
pub mod store;
pub mod trash;

// Re-export commonly used types
pub use config::{read_config, write_config, ConfigError, TrashConfig};
pub use hooks::{HookContext, HookHandle, HookRegistry, Phase, TrashOperation};
pub use node::{
    ContentNode, NodeId, NodeKind, TrashSnapshot, DELETED_DATE, FORMER_EXPIRES, FORMER_NAME,
    FORMER_PARENT,
};
pub use store::{MemoryNodeStore, NodeStore, StoreError};
pub use trash::{
    AncestorRootResolver, ContainerFactory, ExpiryPolicy, FixedRetention, FixedRootResolver,
    RootResolver, StoreContainerFactory, TrashCoordinator, TrashError, TrashOutcome,
};
