//! Expiry policies for thrown nodes.

use chrono::{DateTime, TimeDelta, Utc};

/// Decides when a thrown node becomes eligible for permanent removal.
pub trait ExpiryPolicy: Send + Sync {
    /// Expiry stamped on a node thrown at `now`
    fn expires_at(&self, now: DateTime<Utc>) -> DateTime<Utc>;

    /// Whether a node expiring at `expires` is expired at `now`
    fn is_expired(&self, expires: DateTime<Utc>, now: DateTime<Utc>) -> bool {
        expires <= now
    }
}

/// Keep thrown nodes for a fixed period.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedRetention {
    retention: TimeDelta,
}

impl FixedRetention {
    /// Retention used when nothing else is configured
    pub const DEFAULT_DAYS: u32 = 31;

    #[must_use]
    pub fn new(retention: TimeDelta) -> Self {
        Self { retention }
    }

    #[must_use]
    pub fn days(days: u32) -> Self {
        Self::new(TimeDelta::try_days(i64::from(days)).unwrap_or(TimeDelta::MAX))
    }

    #[must_use]
    pub fn retention(&self) -> TimeDelta {
        self.retention
    }
}

impl Default for FixedRetention {
    fn default() -> Self {
        Self::days(Self::DEFAULT_DAYS)
    }
}

impl ExpiryPolicy for FixedRetention {
    fn expires_at(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        now.checked_add_signed(self.retention)
            .unwrap_or(DateTime::<Utc>::MAX_UTC)
    }
}
