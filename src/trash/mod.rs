//! Reversible soft-delete of content nodes.

pub mod coordinator;
pub mod error;
pub mod expiry;
pub mod resolver;

pub use coordinator::{TrashCoordinator, TrashOutcome};
pub use error::TrashError;
pub use expiry::{ExpiryPolicy, FixedRetention};
pub use resolver::{
    AncestorRootResolver, ContainerFactory, FixedRootResolver, RootResolver,
    StoreContainerFactory, DEFAULT_CONTAINER_NAME,
};
