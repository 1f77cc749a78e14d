//! The authorization chokepoint
//!
//! Every board-scoped read-for-mutation and write resolves its target
//! board here and requires the caller to belong to the board's owning
//! organization. Descendant entities walk up: list -> board,
//! card -> list -> board. Pure check-and-fetch - no side effects; callers
//! persist whatever they mutate afterwards.

use crate::context::CorkboardContext;
use crate::error::{CorkboardError, Result};
use crate::types::{Board, BoardId, Card, CardId, List, ListId, UserId};

/// Load a board, failing with `Unauthorized` unless the caller is a
/// member of its owning organization
pub async fn authorize_board(
    ctx: &CorkboardContext,
    board_id: &BoardId,
    caller: &UserId,
) -> Result<Board> {
    let board = ctx.read_board(board_id).await?;
    let caller = ctx.read_user(caller).await?;
    if !caller.joined_organizations.contains(&board.organization) {
        tracing::warn!(
            board = %board.id,
            user = %caller.id,
            "caller is not a member of the board's organization"
        );
        return Err(CorkboardError::Unauthorized);
    }
    Ok(board)
}

/// Authorize through a list: resolves the owning board and gates on it
pub async fn authorize_list(
    ctx: &CorkboardContext,
    list_id: &ListId,
    caller: &UserId,
) -> Result<(List, Board)> {
    let list = ctx.read_list(list_id).await?;
    let board = authorize_board(ctx, &list.board, caller).await?;
    Ok((list, board))
}

/// Authorize through a card: walks card -> list -> board
pub async fn authorize_card(
    ctx: &CorkboardContext,
    card_id: &CardId,
    caller: &UserId,
) -> Result<(Card, List, Board)> {
    let card = ctx.read_card(card_id).await?;
    let (list, board) = authorize_list(ctx, &card.list, caller).await?;
    Ok((card, list, board))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{MemoryStore, Store};
    use crate::types::{Organization, User};
    use std::sync::Arc;

    async fn setup() -> (CorkboardContext, User, Board) {
        let ctx = CorkboardContext::new(Arc::new(MemoryStore::new()), b"test-secret".to_vec());

        let mut member = User::new("member", "member@example.com", "opaque");
        let org = Organization::new("Eng", "pw", member.id.clone());
        member.joined_organizations.push(org.id.clone());

        let board = Board::new("Sprint", "", org.id.clone());

        ctx.store().write_user(&member).await.unwrap();
        ctx.store().write_org(&org).await.unwrap();
        ctx.store().write_board(&board).await.unwrap();

        (ctx, member, board)
    }

    #[tokio::test]
    async fn test_member_is_authorized() {
        let (ctx, member, board) = setup().await;
        let loaded = authorize_board(&ctx, &board.id, &member.id).await.unwrap();
        assert_eq!(loaded.id, board.id);
    }

    #[tokio::test]
    async fn test_non_member_is_rejected() {
        let (ctx, _, board) = setup().await;
        let outsider = User::new("outsider", "o@example.com", "opaque");
        ctx.store().write_user(&outsider).await.unwrap();

        let result = authorize_board(&ctx, &board.id, &outsider.id).await;
        assert!(matches!(result, Err(CorkboardError::Unauthorized)));
    }

    #[tokio::test]
    async fn test_unknown_board_is_not_found() {
        let (ctx, member, _) = setup().await;
        let result = authorize_board(&ctx, &BoardId::new(), &member.id).await;
        assert!(matches!(result, Err(CorkboardError::BoardNotFound { .. })));
    }

    #[tokio::test]
    async fn test_card_walk_reaches_the_board_gate() {
        let (ctx, member, board) = setup().await;
        let list = List::new("Todo", board.id.clone());
        let card = Card::new("Fix bug", list.id.clone());
        ctx.store().write_list(&list).await.unwrap();
        ctx.store().write_card(&card).await.unwrap();

        let (loaded_card, loaded_list, loaded_board) =
            authorize_card(&ctx, &card.id, &member.id).await.unwrap();
        assert_eq!(loaded_card.id, card.id);
        assert_eq!(loaded_list.id, list.id);
        assert_eq!(loaded_board.id, board.id);

        let outsider = User::new("outsider", "o@example.com", "opaque");
        ctx.store().write_user(&outsider).await.unwrap();
        let result = authorize_card(&ctx, &card.id, &outsider.id).await;
        assert!(matches!(result, Err(CorkboardError::Unauthorized)));
    }
}
