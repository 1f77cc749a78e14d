//! CreateBoard command

use crate::activity::record;
use crate::context::CorkboardContext;
use crate::defaults::MAX_BOARDS_PER_ORG;
use crate::error::{CorkboardError, Result};
use crate::operation::Execute;
use crate::store::Store;
use crate::types::{Board, OrgId, UserId};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;

/// Create a new board in an organization
#[derive(Debug, Deserialize)]
pub struct CreateBoard {
    /// The board name
    pub name: String,
    /// The owning organization
    pub organization: OrgId,
    /// The creating user; must be a member of the organization
    pub actor: UserId,
    /// Background image URL
    #[serde(default)]
    pub background_url: String,
}

impl CreateBoard {
    /// Create a new CreateBoard command
    pub fn new(
        name: impl Into<String>,
        organization: impl Into<OrgId>,
        actor: impl Into<UserId>,
    ) -> Self {
        Self {
            name: name.into(),
            organization: organization.into(),
            actor: actor.into(),
            background_url: String::new(),
        }
    }

    /// Set the background image URL
    pub fn with_background_url(mut self, url: impl Into<String>) -> Self {
        self.background_url = url.into();
        self
    }
}

#[async_trait]
impl Execute<CorkboardContext, CorkboardError> for CreateBoard {
    async fn execute(&self, ctx: &CorkboardContext) -> Result<Value> {
        let actor = ctx.read_user(&self.actor).await?;
        if !actor.joined_organizations.contains(&self.organization) {
            return Err(CorkboardError::Unauthorized);
        }

        let existing = ctx.store().boards_by_org(&self.organization).await?;
        if existing.len() >= MAX_BOARDS_PER_ORG {
            return Err(CorkboardError::QuotaExceeded {
                limit: MAX_BOARDS_PER_ORG,
            });
        }

        let board = Board::new(&self.name, &self.background_url, self.organization.clone());
        ctx.store().write_board(&board).await?;

        record(
            ctx,
            &self.actor,
            &self.organization,
            Some(&board.id),
            "Created a board",
        )
        .await?;

        tracing::info!(board = %board.id, org = %board.organization, "board created");
        Ok(serde_json::to_value(&board)?)
    }
}
