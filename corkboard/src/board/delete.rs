//! DeleteBoard command

use crate::activity::record;
use crate::authz::authorize_board;
use crate::context::CorkboardContext;
use crate::error::{CorkboardError, Result};
use crate::operation::Execute;
use crate::store::Store;
use crate::types::{BoardId, UserId};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;

/// Delete a board.
///
/// Removes the board document only: its lists and cards are not cascaded
/// and become unreachable orphans. Callers that want a clean store must
/// delete the lists first.
#[derive(Debug, Deserialize)]
pub struct DeleteBoard {
    /// The board to delete
    pub board: BoardId,
    /// The caller; must be a member of the owning organization
    pub actor: UserId,
}

impl DeleteBoard {
    /// Create a new DeleteBoard command
    pub fn new(board: impl Into<BoardId>, actor: impl Into<UserId>) -> Self {
        Self {
            board: board.into(),
            actor: actor.into(),
        }
    }
}

#[async_trait]
impl Execute<CorkboardContext, CorkboardError> for DeleteBoard {
    async fn execute(&self, ctx: &CorkboardContext) -> Result<Value> {
        let board = authorize_board(ctx, &self.board, &self.actor).await?;

        record(
            ctx,
            &self.actor,
            &board.organization,
            None,
            format!("Deleted board {}", board.name),
        )
        .await?;

        ctx.store().delete_board(&board.id).await?;

        tracing::info!(board = %board.id, "board deleted");
        Ok(serde_json::json!({ "deleted": true, "id": board.id }))
    }
}
