//! CreateList command

use crate::activity::record;
use crate::authz::authorize_board;
use crate::broadcast::BoardEvent;
use crate::context::CorkboardContext;
use crate::error::{CorkboardError, Result};
use crate::operation::Execute;
use crate::store::Store;
use crate::types::{BoardId, List, UserId};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;

/// Create a list on a board. New lists always land last in the board's
/// list order.
#[derive(Debug, Deserialize)]
pub struct CreateList {
    /// The list name
    pub name: String,
    /// The board to add the list to
    pub board: BoardId,
    /// The caller; must be a member of the owning organization
    pub actor: UserId,
}

impl CreateList {
    /// Create a new CreateList command
    pub fn new(
        name: impl Into<String>,
        board: impl Into<BoardId>,
        actor: impl Into<UserId>,
    ) -> Self {
        Self {
            name: name.into(),
            board: board.into(),
            actor: actor.into(),
        }
    }
}

#[async_trait]
impl Execute<CorkboardContext, CorkboardError> for CreateList {
    async fn execute(&self, ctx: &CorkboardContext) -> Result<Value> {
        let mut board = authorize_board(ctx, &self.board, &self.actor).await?;

        let list = List::new(&self.name, board.id.clone());
        // Child saved before the board reference that depends on it
        ctx.store().write_list(&list).await?;

        board.lists.push(list.id.clone());
        ctx.store().write_board(&board).await?;

        record(
            ctx,
            &self.actor,
            &board.organization,
            Some(&board.id),
            format!("Created list {}", list.name),
        )
        .await?;

        ctx.publish(
            &board.id,
            BoardEvent::ListCreated {
                sender: self.actor.clone(),
                list: list.clone(),
            },
        );

        tracing::info!(list = %list.id, board = %board.id, "list created");
        Ok(serde_json::to_value(&list)?)
    }
}
