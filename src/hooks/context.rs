use super::types::{Phase, TrashOperation};
use crate::node::ContentNode;

/// Context handed to every hook of one notification.
///
/// Pre-hooks share one context by mutable reference, so a veto set by any
/// of them is visible once the whole chain has run.
#[derive(Debug, Clone)]
pub struct HookContext<'a> {
    pub phase: Phase,
    pub operation: TrashOperation,
    /// The node as it was when the notification was raised
    pub node: &'a ContentNode,
    /// Set by a pre-hook to veto the operation
    pub cancel: bool,
}

impl<'a> HookContext<'a> {
    #[must_use]
    pub fn new(phase: Phase, operation: TrashOperation, node: &'a ContentNode) -> Self {
        Self {
            phase,
            operation,
            node,
            cancel: false,
        }
    }

    /// Veto the pending operation. Only meaningful during the pre phase.
    pub fn cancel(&mut self) {
        self.cancel = true;
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancel
    }
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
