//! KickMember command

use crate::context::CorkboardContext;
use crate::error::{CorkboardError, Result};
use crate::operation::Execute;
use crate::store::Store;
use crate::types::{OrgId, UserId};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;

/// Remove a member from an organization. Owner-only; the owner cannot be
/// kicked.
#[derive(Debug, Deserialize)]
pub struct KickMember {
    /// The organization to kick from
    pub organization: OrgId,
    /// The member to remove
    pub member: UserId,
    /// The caller; must be the organization owner
    pub actor: UserId,
}

impl KickMember {
    /// Create a new KickMember command
    pub fn new(
        organization: impl Into<OrgId>,
        member: impl Into<UserId>,
        actor: impl Into<UserId>,
    ) -> Self {
        Self {
            organization: organization.into(),
            member: member.into(),
            actor: actor.into(),
        }
    }
}

#[async_trait]
impl Execute<CorkboardContext, CorkboardError> for KickMember {
    async fn execute(&self, ctx: &CorkboardContext) -> Result<Value> {
        let mut org = ctx.read_org(&self.organization).await?;

        if org.owner != self.actor {
            return Err(CorkboardError::Unauthorized);
        }
        if self.member == org.owner {
            return Err(CorkboardError::CannotRemoveOwner);
        }
        if !org.is_member(&self.member) {
            return Err(CorkboardError::NotAMember {
                id: self.member.to_string(),
            });
        }

        org.members.retain(|member| member != &self.member);
        ctx.store().write_org(&org).await?;

        let mut member = ctx.read_user(&self.member).await?;
        member.joined_organizations.retain(|o| o != &org.id);
        ctx.store().write_user(&member).await?;

        tracing::info!(org = %org.id, member = %member.id, "member kicked");
        Ok(serde_json::to_value(org.view())?)
    }
}
