//! DeleteList command

use crate::activity::record;
use crate::authz::authorize_list;
use crate::broadcast::BoardEvent;
use crate::context::CorkboardContext;
use crate::error::{CorkboardError, Result};
use crate::operation::Execute;
use crate::store::Store;
use crate::types::{ListId, UserId};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;

/// Delete a list.
///
/// The list's id is removed from the owning board's order (order of the
/// siblings preserved) and the list document is deleted. The list's cards
/// are not cascaded and become orphans.
#[derive(Debug, Deserialize)]
pub struct DeleteList {
    /// The list to delete
    pub list: ListId,
    /// The caller; must be a member of the owning organization
    pub actor: UserId,
}

impl DeleteList {
    /// Create a new DeleteList command
    pub fn new(list: impl Into<ListId>, actor: impl Into<UserId>) -> Self {
        Self {
            list: list.into(),
            actor: actor.into(),
        }
    }
}

#[async_trait]
impl Execute<CorkboardContext, CorkboardError> for DeleteList {
    async fn execute(&self, ctx: &CorkboardContext) -> Result<Value> {
        let (list, mut board) = authorize_list(ctx, &self.list, &self.actor).await?;

        board.lists.retain(|id| id != &list.id);
        ctx.store().write_board(&board).await?;
        ctx.store().delete_list(&list.id).await?;

        record(
            ctx,
            &self.actor,
            &board.organization,
            Some(&board.id),
            format!("Removed list {} from board {}", list.name, board.name),
        )
        .await?;

        ctx.publish(
            &board.id,
            BoardEvent::ListDeleted {
                sender: self.actor.clone(),
                list: list.clone(),
            },
        );

        tracing::info!(list = %list.id, board = %board.id, "list deleted");
        Ok(serde_json::json!({ "deleted": true, "id": list.id }))
    }
}
