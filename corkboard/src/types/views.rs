//! Populated read views
//!
//! Authorized board reads and the `board-edited` broadcast carry the board
//! with its lists (and their cards) expanded. Expansion is one level per
//! hop and follows the parent's order array; a dangling child reference is
//! skipped rather than failing the read, since deletions do not cascade.

use super::board::{Board, Card, List};
use super::ids::{BoardId, ListId, OrgId};
use crate::context::CorkboardContext;
use crate::error::Result;
use crate::store::Store;
use serde::{Deserialize, Serialize};

/// A list with its card references resolved to full card documents
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListView {
    pub id: ListId,
    pub name: String,
    pub board: BoardId,
    pub cards: Vec<Card>,
}

/// A board with its lists (and their cards) fully resolved
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardView {
    pub id: BoardId,
    pub name: String,
    pub organization: OrgId,
    pub background_url: String,
    pub lists: Vec<ListView>,
}

/// Expand a list's card references, in card order
pub(crate) async fn populate_list(ctx: &CorkboardContext, list: &List) -> Result<ListView> {
    let mut cards = Vec::with_capacity(list.cards.len());
    for card_id in &list.cards {
        match ctx.store().read_card(card_id).await? {
            Some(card) => cards.push(card),
            None => {
                tracing::debug!(list = %list.id, card = %card_id, "skipping dangling card reference");
            }
        }
    }
    Ok(ListView {
        id: list.id.clone(),
        name: list.name.clone(),
        board: list.board.clone(),
        cards,
    })
}

/// Expand a board's list references (and each list's cards), in list order
pub(crate) async fn populate_board(ctx: &CorkboardContext, board: &Board) -> Result<BoardView> {
    let mut lists = Vec::with_capacity(board.lists.len());
    for list_id in &board.lists {
        match ctx.store().read_list(list_id).await? {
            Some(list) => lists.push(populate_list(ctx, &list).await?),
            None => {
                tracing::debug!(board = %board.id, list = %list_id, "skipping dangling list reference");
            }
        }
    }
    Ok(BoardView {
        id: board.id.clone(),
        name: board.name.clone(),
        organization: board.organization.clone(),
        background_url: board.background_url.clone(),
        lists,
    })
}
