//! DeleteOrg command

use crate::context::CorkboardContext;
use crate::error::{CorkboardError, Result};
use crate::operation::Execute;
use crate::store::Store;
use crate::types::{OrgId, UserId};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;

/// Delete an organization. Owner-only, and the owner must re-confirm the
/// organization password. Cascades the activity log and strips the
/// membership back-reference from every member.
#[derive(Debug, Deserialize)]
pub struct DeleteOrg {
    /// The organization to delete
    pub organization: OrgId,
    /// The caller; must be the organization owner
    pub actor: UserId,
    /// Re-confirmed organization password
    pub password: String,
}

impl DeleteOrg {
    /// Create a new DeleteOrg command
    pub fn new(
        organization: impl Into<OrgId>,
        actor: impl Into<UserId>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            organization: organization.into(),
            actor: actor.into(),
            password: password.into(),
        }
    }
}

#[async_trait]
impl Execute<CorkboardContext, CorkboardError> for DeleteOrg {
    async fn execute(&self, ctx: &CorkboardContext) -> Result<Value> {
        let org = ctx.read_org(&self.organization).await?;

        if org.owner != self.actor {
            return Err(CorkboardError::Unauthorized);
        }
        if org.password != self.password {
            return Err(CorkboardError::WrongPassword);
        }

        for member_id in &org.members {
            let mut member = ctx.read_user(member_id).await?;
            member.joined_organizations.retain(|o| o != &org.id);
            ctx.store().write_user(&member).await?;
        }

        ctx.store().delete_activity_by_org(&org.id).await?;
        ctx.store().delete_org(&org.id).await?;

        tracing::info!(org = %org.id, "organization deleted");
        Ok(serde_json::json!({ "deleted": true, "id": org.id }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::activity::record;
    use crate::store::{MemoryStore, Store};
    use crate::types::{Organization, User};
    use std::sync::Arc;

    async fn setup() -> (CorkboardContext, Organization, User) {
        let ctx = CorkboardContext::new(Arc::new(MemoryStore::new()), b"test-secret".to_vec());

        let mut owner = User::new("owner", "owner@example.com", "opaque");
        let org = Organization::new("Eng", "pw", owner.id.clone());
        owner.joined_organizations.push(org.id.clone());

        ctx.store().write_user(&owner).await.unwrap();
        ctx.store().write_org(&org).await.unwrap();

        (ctx, org, owner)
    }

    #[tokio::test]
    async fn test_delete_cascades() {
        let (ctx, org, owner) = setup().await;
        record(&ctx, &owner.id, &org.id, None, "Created a board")
            .await
            .unwrap();

        let result = DeleteOrg::new(org.id.clone(), owner.id.clone(), "pw")
            .execute(&ctx)
            .await
            .unwrap();

        assert_eq!(result["deleted"], true);
        assert!(ctx.store().read_org(&org.id).await.unwrap().is_none());
        assert!(ctx.store().activity_by_org(&org.id).await.unwrap().is_empty());
        let owner = ctx.read_user(&owner.id).await.unwrap();
        assert!(owner.joined_organizations.is_empty());
    }

    #[tokio::test]
    async fn test_password_reconfirmation_required() {
        let (ctx, org, owner) = setup().await;

        let result = DeleteOrg::new(org.id.clone(), owner.id.clone(), "wrong")
            .execute(&ctx)
            .await;
        assert!(matches!(result, Err(CorkboardError::WrongPassword)));
        assert!(ctx.store().read_org(&org.id).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_non_owner_cannot_delete() {
        let (ctx, org, _) = setup().await;
        let outsider = User::new("outsider", "o@example.com", "opaque");
        ctx.store().write_user(&outsider).await.unwrap();

        let result = DeleteOrg::new(org.id.clone(), outsider.id.clone(), "pw")
            .execute(&ctx)
            .await;
        assert!(matches!(result, Err(CorkboardError::Unauthorized)));
    }
}
