//! ListActivity command

use crate::context::CorkboardContext;
use crate::error::{CorkboardError, Result};
use crate::operation::Execute;
use crate::store::Store;
use crate::types::OrgId;
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;

/// List an organization's activity log, newest first
#[derive(Debug, Deserialize)]
pub struct ListActivity {
    /// The organization whose log to read
    pub organization: OrgId,
}

impl ListActivity {
    /// Create a new ListActivity command
    pub fn new(organization: impl Into<OrgId>) -> Self {
        Self {
            organization: organization.into(),
        }
    }
}

#[async_trait]
impl Execute<CorkboardContext, CorkboardError> for ListActivity {
    async fn execute(&self, ctx: &CorkboardContext) -> Result<Value> {
        // Fail on unknown orgs rather than returning an empty log
        ctx.read_org(&self.organization).await?;

        let mut entries = ctx.store().activity_by_org(&self.organization).await?;
        entries.reverse();
        Ok(serde_json::to_value(&entries)?)
    }
}
