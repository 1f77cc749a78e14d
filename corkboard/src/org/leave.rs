//! LeaveOrg command

use crate::context::CorkboardContext;
use crate::error::{CorkboardError, Result};
use crate::operation::Execute;
use crate::store::Store;
use crate::types::{OrgId, UserId};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;

/// Leave an organization.
///
/// The last member leaving deletes the organization (and, as the one
/// cascading path in the engine, its activity log). An owner with other
/// members present must transfer ownership first.
#[derive(Debug, Deserialize)]
pub struct LeaveOrg {
    /// The organization to leave
    pub organization: OrgId,
    /// The leaving user
    pub user: UserId,
}

impl LeaveOrg {
    /// Create a new LeaveOrg command
    pub fn new(organization: impl Into<OrgId>, user: impl Into<UserId>) -> Self {
        Self {
            organization: organization.into(),
            user: user.into(),
        }
    }
}

#[async_trait]
impl Execute<CorkboardContext, CorkboardError> for LeaveOrg {
    async fn execute(&self, ctx: &CorkboardContext) -> Result<Value> {
        let mut org = ctx.read_org(&self.organization).await?;

        if !org.is_member(&self.user) {
            return Err(CorkboardError::NotAMember {
                id: self.user.to_string(),
            });
        }
        if self.user == org.owner && org.members.len() > 1 {
            return Err(CorkboardError::CannotRemoveOwner);
        }

        org.members.retain(|member| member != &self.user);

        let mut user = ctx.read_user(&self.user).await?;
        user.joined_organizations.retain(|o| o != &org.id);
        ctx.store().write_user(&user).await?;

        if org.members.is_empty() {
            ctx.store().delete_activity_by_org(&org.id).await?;
            ctx.store().delete_org(&org.id).await?;
            tracing::info!(org = %org.id, "last member left, organization deleted");
            return Ok(serde_json::json!({ "deleted": true, "id": org.id }));
        }

        ctx.store().write_org(&org).await?;
        tracing::info!(org = %org.id, user = %user.id, "member left");
        Ok(serde_json::to_value(org.view())?)
    }
}
