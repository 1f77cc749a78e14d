//! EditList command

use crate::activity::record;
use crate::authz::authorize_list;
use crate::broadcast::BoardEvent;
use crate::context::CorkboardContext;
use crate::error::{CorkboardError, Result};
use crate::operation::Execute;
use crate::store::Store;
use crate::types::{ListId, OrgId, UserId};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;

/// Rename a list
#[derive(Debug, Deserialize)]
pub struct EditList {
    /// The list to rename
    pub list: ListId,
    /// The new name
    pub name: String,
    /// The caller; must be a member of the owning organization
    pub actor: UserId,
    /// The organization to record the rename under
    pub organization: OrgId,
}

impl EditList {
    /// Create a new EditList command
    pub fn new(
        list: impl Into<ListId>,
        name: impl Into<String>,
        actor: impl Into<UserId>,
        organization: impl Into<OrgId>,
    ) -> Self {
        Self {
            list: list.into(),
            name: name.into(),
            actor: actor.into(),
            organization: organization.into(),
        }
    }
}

#[async_trait]
impl Execute<CorkboardContext, CorkboardError> for EditList {
    async fn execute(&self, ctx: &CorkboardContext) -> Result<Value> {
        let (mut list, board) = authorize_list(ctx, &self.list, &self.actor).await?;

        let old_name = std::mem::replace(&mut list.name, self.name.clone());
        ctx.store().write_list(&list).await?;

        record(
            ctx,
            &self.actor,
            &self.organization,
            Some(&board.id),
            format!("Renamed list {old_name} to {}", list.name),
        )
        .await?;

        ctx.publish(
            &board.id,
            BoardEvent::ListEdited {
                sender: self.actor.clone(),
                list: list.clone(),
            },
        );

        Ok(serde_json::to_value(&list)?)
    }
}
