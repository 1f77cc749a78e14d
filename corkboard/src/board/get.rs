//! Board read commands

use crate::authz::authorize_board;
use crate::context::CorkboardContext;
use crate::error::{CorkboardError, Result};
use crate::operation::Execute;
use crate::store::Store;
use crate::types::{populate_board, BoardId, OrgId, UserId};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;

/// Fetch a board with its lists and cards resolved
#[derive(Debug, Deserialize)]
pub struct GetBoard {
    /// The board to fetch
    pub board: BoardId,
    /// The caller; must be a member of the owning organization
    pub actor: UserId,
}

impl GetBoard {
    /// Create a new GetBoard command
    pub fn new(board: impl Into<BoardId>, actor: impl Into<UserId>) -> Self {
        Self {
            board: board.into(),
            actor: actor.into(),
        }
    }
}

#[async_trait]
impl Execute<CorkboardContext, CorkboardError> for GetBoard {
    async fn execute(&self, ctx: &CorkboardContext) -> Result<Value> {
        let board = authorize_board(ctx, &self.board, &self.actor).await?;
        let view = populate_board(ctx, &board).await?;
        Ok(serde_json::to_value(view)?)
    }
}

/// List an organization's boards.
///
/// An organization with no boards is not an error - the caller gets an
/// empty collection.
#[derive(Debug, Deserialize)]
pub struct ListBoards {
    /// The organization whose boards to list
    pub organization: OrgId,
    /// The caller; must be a member of the organization
    pub actor: UserId,
}

impl ListBoards {
    /// Create a new ListBoards command
    pub fn new(organization: impl Into<OrgId>, actor: impl Into<UserId>) -> Self {
        Self {
            organization: organization.into(),
            actor: actor.into(),
        }
    }
}

#[async_trait]
impl Execute<CorkboardContext, CorkboardError> for ListBoards {
    async fn execute(&self, ctx: &CorkboardContext) -> Result<Value> {
        let actor = ctx.read_user(&self.actor).await?;
        if !actor.joined_organizations.contains(&self.organization) {
            return Err(CorkboardError::Unauthorized);
        }
        let boards = ctx.store().boards_by_org(&self.organization).await?;
        Ok(serde_json::to_value(boards)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{MemoryStore, Store};
    use crate::types::{Board, Card, List, Organization, User};
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
    async fn test_get_board_is_fully_populated() {
        let (ctx, org, owner) = setup().await;
        let mut board = Board::new("Sprint", "", org.id.clone());
        let mut list = List::new("Todo", board.id.clone());
        let card = Card::new("Fix bug", list.id.clone());
        list.cards.push(card.id.clone());
        board.lists.push(list.id.clone());
        ctx.store().write_board(&board).await.unwrap();
        ctx.store().write_list(&list).await.unwrap();
        ctx.store().write_card(&card).await.unwrap();

        let result = GetBoard::new(board.id.clone(), owner.id.clone())
            .execute(&ctx)
            .await
            .unwrap();

        assert_eq!(result["lists"][0]["name"], "Todo");
        assert_eq!(result["lists"][0]["cards"][0]["name"], "Fix bug");
    }

    #[tokio::test]
    async fn test_list_boards_empty_is_ok() {
        let (ctx, org, owner) = setup().await;

        let result = ListBoards::new(org.id.clone(), owner.id.clone())
            .execute(&ctx)
            .await
            .unwrap();
        assert_eq!(result.as_array().unwrap().len(), 0);
    }

    #[tokio::test]
    async fn test_list_boards_requires_membership() {
        let (ctx, org, _) = setup().await;
        let outsider = User::new("outsider", "o@example.com", "opaque");
        ctx.store().write_user(&outsider).await.unwrap();

        let result = ListBoards::new(org.id.clone(), outsider.id.clone())
            .execute(&ctx)
            .await;
        assert!(matches!(result, Err(CorkboardError::Unauthorized)));
    }
}
