use std::fmt;
use tracing::debug;

use super::context::HookContext;
use super::types::TrashOperation;

/// Callback run before an operation; may veto it through the context.
pub type PreHook = Box<dyn Fn(&mut HookContext<'_>) + Send + Sync>;
/// Callback run after an operation completed.
pub type PostHook = Box<dyn Fn(&HookContext<'_>) + Send + Sync>;

/// Handle returned on registration, used to remove the hook again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HookHandle(u64);

struct Registered<H> {
    handle: HookHandle,
    operation: TrashOperation,
    hook: H,
}

/// Registered hooks, invoked synchronously in registration order.
#[derive(Default)]
pub struct HookRegistry {
    next_handle: u64,
    pre: Vec<Registered<PreHook>>,
    post: Vec<Registered<PostHook>>,
}

impl fmt::Debug for HookRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HookRegistry")
            .field("pre", &self.pre.len())
            .field("post", &self.post.len())
            .finish()
    }
}

impl HookRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn allocate_handle(&mut self) -> HookHandle {
        let handle = HookHandle(self.next_handle);
        self.next_handle = self.next_handle.wrapping_add(1);
        handle
    }

    /// Register a cancellable hook that runs before `operation`.
    pub fn on_before<F>(&mut self, operation: TrashOperation, hook: F) -> HookHandle
    where
        F: Fn(&mut HookContext<'_>) + Send + Sync + 'static,
    {
        let handle = self.allocate_handle();
        self.pre.push(Registered {
            handle,
            operation,
            hook: Box::new(hook),
        });
        handle
    }

    /// Register a hook that runs after `operation` completed.
    pub fn on_after<F>(&mut self, operation: TrashOperation, hook: F) -> HookHandle
    where
        F: Fn(&HookContext<'_>) + Send + Sync + 'static,
    {
        let handle = self.allocate_handle();
        self.post.push(Registered {
            handle,
            operation,
            hook: Box::new(hook),
        });
        handle
    }

    /// Remove a previously registered hook. Returns false if the handle is unknown.
    pub fn remove(&mut self, handle: HookHandle) -> bool {
        let before = self.len();
        self.pre.retain(|entry| entry.handle != handle);
        self.post.retain(|entry| entry.handle != handle);
        self.len() != before
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pre.len().saturating_add(self.post.len())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pre.is_empty() && self.post.is_empty()
    }

    /// Run every pre-hook for the context's operation.
    ///
    /// All matching hooks run even after one of them cancels; the caller
    /// inspects `ctx.cancel` once the chain is done.
    pub fn run_pre(&self, ctx: &mut HookContext<'_>) {
        let operation = ctx.operation;
        let matching: Vec<&Registered<PreHook>> = self
            .pre
            .iter()
            .filter(|entry| entry.operation == operation)
            .collect();
        if matching.is_empty() {
            return;
        }
        debug!(
            "Running {} {}-hooks for {}",
            matching.len(),
            ctx.phase.as_str(),
            operation
        );
        for entry in matching {
            (entry.hook)(&mut *ctx);
        }
    }

    /// Run every post-hook for the context's operation.
    pub fn run_post(&self, ctx: &HookContext<'_>) {
        let operation = ctx.operation;
        let matching: Vec<&Registered<PostHook>> = self
            .post
            .iter()
            .filter(|entry| entry.operation == operation)
            .collect();
        if matching.is_empty() {
            return;
        }
        debug!(
            "Running {} {}-hooks for {}",
            matching.len(),
            ctx.phase.as_str(),
            operation
        );
        for entry in matching {
            (entry.hook)(ctx);
        }
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
