//! CreateOrg command

use crate::context::CorkboardContext;
use crate::error::{CorkboardError, Result};
use crate::operation::Execute;
use crate::store::Store;
use crate::types::{Organization, UserId};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;

/// Create a new organization with the caller as owner and sole member
#[derive(Debug, Deserialize)]
pub struct CreateOrg {
    /// The organization name
    pub name: String,
    /// The shared join secret
    pub password: String,
    /// The creating user, who becomes the owner
    pub owner: UserId,
}

impl CreateOrg {
    /// Create a new CreateOrg command
    pub fn new(
        name: impl Into<String>,
        password: impl Into<String>,
        owner: impl Into<UserId>,
    ) -> Self {
        Self {
            name: name.into(),
            password: password.into(),
            owner: owner.into(),
        }
    }
}

#[async_trait]
impl Execute<CorkboardContext, CorkboardError> for CreateOrg {
    async fn execute(&self, ctx: &CorkboardContext) -> Result<Value> {
        let mut owner = ctx.read_user(&self.owner).await?;

        let org = Organization::new(&self.name, &self.password, owner.id.clone());
        ctx.store().write_org(&org).await?;

        owner.joined_organizations.push(org.id.clone());
        ctx.store().write_user(&owner).await?;

        tracing::info!(org = %org.id, owner = %owner.id, "organization created");
        Ok(serde_json::to_value(org.view())?)
    }
}
