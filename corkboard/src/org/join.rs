//! JoinOrg command

use crate::context::CorkboardContext;
use crate::error::{CorkboardError, Result};
use crate::operation::Execute;
use crate::store::Store;
use crate::types::{OrgId, UserId};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;

/// Join an organization using its shared password
#[derive(Debug, Deserialize)]
pub struct JoinOrg {
    /// The organization to join
    pub organization: OrgId,
    /// The join secret to check
    pub password: String,
    /// The joining user
    pub user: UserId,
}

impl JoinOrg {
    /// Create a new JoinOrg command
    pub fn new(
        organization: impl Into<OrgId>,
        password: impl Into<String>,
        user: impl Into<UserId>,
    ) -> Self {
        Self {
            organization: organization.into(),
            password: password.into(),
            user: user.into(),
        }
    }
}

#[async_trait]
impl Execute<CorkboardContext, CorkboardError> for JoinOrg {
    async fn execute(&self, ctx: &CorkboardContext) -> Result<Value> {
        let mut org = ctx.read_org(&self.organization).await?;

        if org.password != self.password {
            return Err(CorkboardError::WrongPassword);
        }
        if org.is_member(&self.user) {
            return Err(CorkboardError::AlreadyMember {
                id: self.user.to_string(),
            });
        }

        let mut user = ctx.read_user(&self.user).await?;
        org.members.push(user.id.clone());
        ctx.store().write_org(&org).await?;

        user.joined_organizations.push(org.id.clone());
        ctx.store().write_user(&user).await?;

        tracing::info!(org = %org.id, user = %user.id, "member joined");
        Ok(serde_json::to_value(org.view())?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{MemoryStore, Store};
    use crate::types::{Organization, User};
    use std::sync::Arc;

    async fn setup() -> (CorkboardContext, Organization, User) {
        let ctx = CorkboardContext::new(Arc::new(MemoryStore::new()), b"test-secret".to_vec());

        let mut owner = User::new("owner", "owner@example.com", "opaque");
        let org = Organization::new("Eng", "hunter2", owner.id.clone());
        owner.joined_organizations.push(org.id.clone());
        let joiner = User::new("joiner", "joiner@example.com", "opaque");

        ctx.store().write_user(&owner).await.unwrap();
        ctx.store().write_user(&joiner).await.unwrap();
        ctx.store().write_org(&org).await.unwrap();

        (ctx, org, joiner)
    }

    #[tokio::test]
    async fn test_join_with_correct_password() {
        let (ctx, org, joiner) = setup().await;

        let result = JoinOrg::new(org.id.clone(), "hunter2", joiner.id.clone())
            .execute(&ctx)
            .await
            .unwrap();

        assert_eq!(result["members"].as_array().unwrap().len(), 2);
        let user = ctx.read_user(&joiner.id).await.unwrap();
        assert!(user.joined_organizations.contains(&org.id));
    }

    #[tokio::test]
    async fn test_wrong_password_adds_nothing() {
        let (ctx, org, joiner) = setup().await;

        let result = JoinOrg::new(org.id.clone(), "nope", joiner.id.clone())
            .execute(&ctx)
            .await;
        assert!(matches!(result, Err(CorkboardError::WrongPassword)));

        let org = ctx.read_org(&org.id).await.unwrap();
        assert_eq!(org.members.len(), 1);
        let user = ctx.read_user(&joiner.id).await.unwrap();
        assert!(user.joined_organizations.is_empty());
    }

    #[tokio::test]
    async fn test_joining_twice_fails() {
        let (ctx, org, joiner) = setup().await;

        JoinOrg::new(org.id.clone(), "hunter2", joiner.id.clone())
            .execute(&ctx)
            .await
            .unwrap();
        let result = JoinOrg::new(org.id.clone(), "hunter2", joiner.id.clone())
            .execute(&ctx)
            .await;

        assert!(matches!(result, Err(CorkboardError::AlreadyMember { .. })));
    }
}
