//! Activity log entry types

use super::ids::{ActivityId, BoardId, OrgId, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An append-only audit record of a mutating operation.
///
/// Activities are never edited or deleted individually; the one removal
/// path is cascading organization deletion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Activity {
    pub id: ActivityId,
    pub user: UserId,
    pub organization: OrgId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub board: Option<BoardId>,
    pub action: String,
    pub timestamp: DateTime<Utc>,
}

impl Activity {
    /// Create a new activity entry stamped with the current time
    pub fn new(
        user: UserId,
        organization: OrgId,
        board: Option<BoardId>,
        action: impl Into<String>,
    ) -> Self {
        Self {
            id: ActivityId::new(),
            user,
            organization,
            board,
            action: action.into(),
            timestamp: Utc::now(),
        }
    }
}
