//! Former-state snapshot recorded on a node when it is thrown into the trash.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::id::NodeId;

/// Detail key holding the node's name before it was thrown.
pub const FORMER_NAME: &str = "FormerName";
/// Detail key holding the id of the node's parent before it was thrown.
pub const FORMER_PARENT: &str = "FormerParent";
/// Detail key holding the node's expiry before it was thrown (may be null).
pub const FORMER_EXPIRES: &str = "FormerExpires";
/// Detail key holding the time the node was thrown.
pub const DELETED_DATE: &str = "DeletedDate";

/// Everything needed to reverse a throw.
///
/// Serialized under the well-known detail keys so that collaborators reading
/// a plain key/value view of the node see the same names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrashSnapshot {
    #[serde(rename = "FormerName")]
    pub former_name: String,
    #[serde(rename = "FormerParent")]
    pub former_parent: NodeId,
    #[serde(rename = "FormerExpires", default)]
    pub former_expires: Option<DateTime<Utc>>,
    #[serde(rename = "DeletedDate")]
    pub deleted_at: DateTime<Utc>,
}

impl TrashSnapshot {
    /// Export as a key/value detail map using the well-known keys.
    #[must_use]
    pub fn to_details(&self) -> Map<String, Value> {
        let mut details = Map::new();
        details.insert(
            FORMER_NAME.to_string(),
            Value::String(self.former_name.clone()),
        );
        details.insert(
            FORMER_PARENT.to_string(),
            Value::String(self.former_parent.to_string()),
        );
        details.insert(
            FORMER_EXPIRES.to_string(),
            self.former_expires
                .map_or(Value::Null, |expires| Value::String(expires.to_rfc3339())),
        );
        details.insert(
            DELETED_DATE.to_string(),
            Value::String(self.deleted_at.to_rfc3339()),
        );
        details
    }
}
