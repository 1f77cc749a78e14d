//! Organization read commands

use crate::context::CorkboardContext;
use crate::error::{CorkboardError, Result};
use crate::operation::Execute;
use crate::store::Store;
use crate::types::{OrgId, UserId};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;

/// Fetch a single organization, password stripped
#[derive(Debug, Deserialize)]
pub struct GetOrg {
    /// The organization to fetch
    pub organization: OrgId,
}

impl GetOrg {
    /// Create a new GetOrg command
    pub fn new(organization: impl Into<OrgId>) -> Self {
        Self {
            organization: organization.into(),
        }
    }
}

#[async_trait]
impl Execute<CorkboardContext, CorkboardError> for GetOrg {
    async fn execute(&self, ctx: &CorkboardContext) -> Result<Value> {
        let org = ctx.read_org(&self.organization).await?;
        Ok(serde_json::to_value(org.view())?)
    }
}

/// List the organizations a user belongs to
#[derive(Debug, Deserialize)]
pub struct ListOrgs {
    /// The member whose organizations to list
    pub member: UserId,
}

impl ListOrgs {
    /// Create a new ListOrgs command
    pub fn new(member: impl Into<UserId>) -> Self {
        Self {
            member: member.into(),
        }
    }
}

#[async_trait]
impl Execute<CorkboardContext, CorkboardError> for ListOrgs {
    async fn execute(&self, ctx: &CorkboardContext) -> Result<Value> {
        let orgs = ctx.store().orgs_by_member(&self.member).await?;
        let views: Vec<_> = orgs.iter().map(|org| org.view()).collect();
        Ok(serde_json::to_value(views)?)
    }
}

/// List every organization as an id/name directory for the join screen
#[derive(Debug, Default, Deserialize)]
pub struct ListAllOrgs;

impl ListAllOrgs {
    /// Create a new ListAllOrgs command
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Execute<CorkboardContext, CorkboardError> for ListAllOrgs {
    async fn execute(&self, ctx: &CorkboardContext) -> Result<Value> {
        let orgs = ctx.store().all_orgs().await?;
        let directory: Vec<_> = orgs
            .iter()
            .map(|org| serde_json::json!({ "id": org.id, "name": org.name }))
            .collect();
        Ok(Value::Array(directory))
    }
}
