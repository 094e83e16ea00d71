pub mod context;
pub mod registry;
pub mod types;

pub use context::HookContext;
pub use registry::{HookHandle, HookRegistry, PostHook, PreHook};
pub use types::{Phase, TrashOperation};
