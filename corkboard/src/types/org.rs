//! Organization types: the membership and authorization boundary

use super::ids::{ActivityId, OrgId, UserId};
use serde::{Deserialize, Serialize};

/// An organization - the membership boundary that gates every board-scoped
/// mutation. The `password` is the shared join secret, compared as plain
/// text when joining.
///
/// Invariants: `owner` is always present in `members`; an organization
/// whose membership empties is deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Organization {
    pub id: OrgId,
    pub name: String,
    pub password: String,
    pub owner: UserId,
    pub members: Vec<UserId>,
    /// Back-references to this organization's activity log entries
    #[serde(default)]
    pub activity: Vec<ActivityId>,
}

impl Organization {
    /// Create a new organization with the owner as sole member
    pub fn new(name: impl Into<String>, password: impl Into<String>, owner: UserId) -> Self {
        Self {
            id: OrgId::new(),
            name: name.into(),
            password: password.into(),
            members: vec![owner.clone()],
            owner,
            activity: Vec::new(),
        }
    }

    /// Check whether a user belongs to this organization
    pub fn is_member(&self, user: &UserId) -> bool {
        self.members.contains(user)
    }

    /// The password-free view of this organization
    pub fn view(&self) -> OrgView {
        OrgView {
            id: self.id.clone(),
            name: self.name.clone(),
            owner: self.owner.clone(),
            members: self.members.clone(),
        }
    }
}

/// Public organization view with the join secret stripped
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrgView {
    pub id: OrgId,
    pub name: String,
    pub owner: UserId,
    pub members: Vec<UserId>,
}
