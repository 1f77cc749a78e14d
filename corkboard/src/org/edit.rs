//! EditOrg command

use crate::context::CorkboardContext;
use crate::error::{CorkboardError, Result};
use crate::operation::Execute;
use crate::store::Store;
use crate::types::{OrgId, UserId};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;

/// Edit an organization: rename, rotate the join password, or transfer
/// ownership. Owner-only.
#[derive(Debug, Deserialize)]
pub struct EditOrg {
    /// The organization to edit
    pub organization: OrgId,
    /// The caller; must be the organization owner
    pub actor: UserId,
    /// New name
    pub name: Option<String>,
    /// Current password, required when rotating
    pub old_password: Option<String>,
    /// New join password
    pub password: Option<String>,
    /// New owner; must already be a member
    pub owner: Option<UserId>,
}

impl EditOrg {
    /// Create a new EditOrg command
    pub fn new(organization: impl Into<OrgId>, actor: impl Into<UserId>) -> Self {
        Self {
            organization: organization.into(),
            actor: actor.into(),
            name: None,
            old_password: None,
            password: None,
            owner: None,
        }
    }

    /// Set the new name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Rotate the join password
    pub fn with_password(mut self, old: impl Into<String>, new: impl Into<String>) -> Self {
        self.old_password = Some(old.into());
        self.password = Some(new.into());
        self
    }

    /// Transfer ownership
    pub fn with_owner(mut self, owner: impl Into<UserId>) -> Self {
        self.owner = Some(owner.into());
        self
    }
}

#[async_trait]
impl Execute<CorkboardContext, CorkboardError> for EditOrg {
    async fn execute(&self, ctx: &CorkboardContext) -> Result<Value> {
        let mut org = ctx.read_org(&self.organization).await?;

        if org.owner != self.actor {
            return Err(CorkboardError::Unauthorized);
        }

        if let Some(name) = &self.name {
            org.name = name.clone();
        }
        if let Some(password) = &self.password {
            if self.old_password.as_deref() != Some(org.password.as_str()) {
                return Err(CorkboardError::WrongPassword);
            }
            org.password = password.clone();
        }
        if let Some(owner) = &self.owner {
            if !org.is_member(owner) {
                return Err(CorkboardError::NotAMember {
                    id: owner.to_string(),
                });
            }
            org.owner = owner.clone();
        }

        ctx.store().write_org(&org).await?;
        Ok(serde_json::to_value(org.view())?)
    }
}
