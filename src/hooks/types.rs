/// Phase of hook execution
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Pre,
    Post,
}

impl Phase {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Phase::Pre => "pre",
            Phase::Post => "post",
        }
    }
}

/// Operations that hooks can target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrashOperation {
    Throw,
    Restore,
}

impl TrashOperation {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            TrashOperation::Throw => "throw",
            TrashOperation::Restore => "restore",
        }
    }
}

impl std::fmt::Display for TrashOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
