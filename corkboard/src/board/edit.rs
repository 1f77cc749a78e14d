//! EditBoard command
//!
//! One operation covers renames, background changes, and reordering - the
//! shape the drag-and-drop client sends. Reorders are whole-snapshot:
//! `list_order` must be a permutation of the board's current list ids, and
//! `card_order` replaces every list's card sequence at once.

use crate::activity::record;
use crate::authz::authorize_board;
use crate::broadcast::BoardEvent;
use crate::context::CorkboardContext;
use crate::error::{CorkboardError, Result};
use crate::operation::Execute;
use crate::store::Store;
use crate::types::{populate_board, BoardId, CardId, ListId, UserId};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashSet;

/// Edit a board: rename, change background, and/or reorder its contents
#[derive(Debug, Deserialize)]
pub struct EditBoard {
    /// The board to edit
    pub board: BoardId,
    /// The caller; must be a member of the owning organization
    pub actor: UserId,
    /// New board name
    pub name: Option<String>,
    /// New background image URL
    pub background_url: Option<String>,
    /// Permutation of the board's current list ids
    pub list_order: Option<Vec<ListId>>,
    /// Replacement card sequence for every list, in (possibly just
    /// reordered) list order; entry `i` becomes list `i`'s card order
    pub card_order: Option<Vec<Vec<CardId>>>,
}

impl EditBoard {
    /// Create a new EditBoard command
    pub fn new(board: impl Into<BoardId>, actor: impl Into<UserId>) -> Self {
        Self {
            board: board.into(),
            actor: actor.into(),
            name: None,
            background_url: None,
            list_order: None,
            card_order: None,
        }
    }

    /// Set the new name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the new background URL
    pub fn with_background_url(mut self, url: impl Into<String>) -> Self {
        self.background_url = Some(url.into());
        self
    }

    /// Set the list order
    pub fn with_list_order(mut self, order: Vec<ListId>) -> Self {
        self.list_order = Some(order);
        self
    }

    /// Set the per-list card orders
    pub fn with_card_order(mut self, order: Vec<Vec<CardId>>) -> Self {
        self.card_order = Some(order);
        self
    }

    fn activity_action(&self) -> String {
        match (&self.name, &self.background_url) {
            (Some(name), _) => format!("Renamed the board to {name}"),
            (None, Some(_)) => "Changed the background image".to_string(),
            (None, None) => "Edited the board".to_string(),
        }
    }
}

#[async_trait]
impl Execute<CorkboardContext, CorkboardError> for EditBoard {
    async fn execute(&self, ctx: &CorkboardContext) -> Result<Value> {
        let mut board = authorize_board(ctx, &self.board, &self.actor).await?;

        if let Some(name) = &self.name {
            board.name = name.clone();
        }
        if let Some(url) = &self.background_url {
            board.background_url = url.clone();
        }

        if let Some(order) = &self.list_order {
            if order.len() != board.lists.len() {
                return Err(CorkboardError::InvalidOrderShape {
                    expected: board.lists.len(),
                    actual: order.len(),
                });
            }
            let mut remaining: HashSet<&ListId> = board.lists.iter().collect();
            for id in order {
                if !remaining.remove(id) {
                    return Err(CorkboardError::ReferenceNotFound { id: id.to_string() });
                }
            }
            board.lists = order.clone();
        }

        if let Some(card_order) = &self.card_order {
            if card_order.len() != board.lists.len() {
                return Err(CorkboardError::InvalidOrderShape {
                    expected: board.lists.len(),
                    actual: card_order.len(),
                });
            }
            // Children are saved before the board reference that depends
            // on them; a crash in between leaves the new card orders in
            // place under the old list order.
            for (list_id, cards) in board.lists.iter().zip(card_order) {
                let mut list = ctx.read_list(list_id).await?;
                list.cards = cards.clone();
                ctx.store().write_list(&list).await?;
            }
        }

        // Reordering alone is not logged - drags would flood the audit log
        if self.list_order.is_none() && self.card_order.is_none() {
            record(
                ctx,
                &self.actor,
                &board.organization,
                Some(&board.id),
                self.activity_action(),
            )
            .await?;
        }

        ctx.store().write_board(&board).await?;

        let view = populate_board(ctx, &board).await?;
        ctx.publish(&board.id, BoardEvent::BoardEdited(view.clone()));

        Ok(serde_json::to_value(view)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{MemoryStore, Store};
    use crate::types::{Board, List, Organization, User};
    use std::sync::Arc;

    async fn setup() -> (CorkboardContext, User, Board, Vec<List>) {
        let ctx = CorkboardContext::new(Arc::new(MemoryStore::new()), b"test-secret".to_vec());

        let mut owner = User::new("owner", "owner@example.com", "opaque");
        let org = Organization::new("Eng", "pw", owner.id.clone());
        owner.joined_organizations.push(org.id.clone());

        let mut board = Board::new("Sprint", "", org.id.clone());
        let lists: Vec<List> = ["Todo", "Doing", "Done"]
            .iter()
            .map(|name| List::new(*name, board.id.clone()))
            .collect();
        for list in &lists {
            board.lists.push(list.id.clone());
        }

        ctx.store().write_user(&owner).await.unwrap();
        ctx.store().write_org(&org).await.unwrap();
        ctx.store().write_board(&board).await.unwrap();
        for list in &lists {
            ctx.store().write_list(list).await.unwrap();
        }

        (ctx, owner, board, lists)
    }

    #[tokio::test]
    async fn test_rename_records_activity() {
        let (ctx, owner, board, _) = setup().await;

        let result = EditBoard::new(board.id.clone(), owner.id.clone())
            .with_name("Sprint 2")
            .execute(&ctx)
            .await
            .unwrap();
        assert_eq!(result["name"], "Sprint 2");

        let activity = ctx.store().activity_by_org(&board.organization).await.unwrap();
        assert_eq!(activity.len(), 1);
        assert_eq!(activity[0].action, "Renamed the board to Sprint 2");
    }

    #[tokio::test]
    async fn test_reorder_lists_matches_input_exactly() {
        let (ctx, owner, board, lists) = setup().await;
        let order = vec![lists[1].id.clone(), lists[0].id.clone(), lists[2].id.clone()];

        EditBoard::new(board.id.clone(), owner.id.clone())
            .with_list_order(order.clone())
            .execute(&ctx)
            .await
            .unwrap();

        let board = ctx.read_board(&board.id).await.unwrap();
        assert_eq!(board.lists, order);

        // Reordering alone is not logged
        let activity = ctx.store().activity_by_org(&board.organization).await.unwrap();
        assert!(activity.is_empty());
    }

    #[tokio::test]
    async fn test_reorder_is_idempotent() {
        let (ctx, owner, board, lists) = setup().await;
        let order = vec![lists[2].id.clone(), lists[0].id.clone(), lists[1].id.clone()];

        for _ in 0..2 {
            EditBoard::new(board.id.clone(), owner.id.clone())
                .with_list_order(order.clone())
                .execute(&ctx)
                .await
                .unwrap();
        }

        let board = ctx.read_board(&board.id).await.unwrap();
        assert_eq!(board.lists, order);
    }

    #[tokio::test]
    async fn test_unknown_list_id_is_rejected() {
        let (ctx, owner, board, lists) = setup().await;
        let order = vec![
            lists[0].id.clone(),
            lists[1].id.clone(),
            crate::types::ListId::new(),
        ];

        let result = EditBoard::new(board.id.clone(), owner.id.clone())
            .with_list_order(order)
            .execute(&ctx)
            .await;
        assert!(matches!(result, Err(CorkboardError::ReferenceNotFound { .. })));

        // Order unchanged
        let reloaded = ctx.read_board(&board.id).await.unwrap();
        assert_eq!(reloaded.lists, board.lists);
    }

    #[tokio::test]
    async fn test_card_order_shape_mismatch_leaves_board_unchanged() {
        let (ctx, owner, board, lists) = setup().await;

        let result = EditBoard::new(board.id.clone(), owner.id.clone())
            .with_card_order(vec![vec![], vec![]])
            .execute(&ctx)
            .await;
        assert!(matches!(
            result,
            Err(CorkboardError::InvalidOrderShape { expected: 3, actual: 2 })
        ));

        let reloaded = ctx.read_board(&board.id).await.unwrap();
        assert_eq!(reloaded.lists, board.lists);
        // Card orders untouched too
        for list in &lists {
            assert!(ctx.read_list(&list.id).await.unwrap().cards.is_empty());
        }
    }

    #[tokio::test]
    async fn test_card_order_replaces_list_snapshots() {
        let (ctx, owner, board, lists) = setup().await;
        let card_ids: Vec<_> = (0..2).map(|_| crate::types::CardId::new()).collect();

        EditBoard::new(board.id.clone(), owner.id.clone())
            .with_card_order(vec![card_ids.clone(), vec![], vec![]])
            .execute(&ctx)
            .await
            .unwrap();

        let todo = ctx.read_list(&lists[0].id).await.unwrap();
        assert_eq!(todo.cards, card_ids);
    }

    #[tokio::test]
    async fn test_edit_broadcasts_the_updated_board() {
        let (ctx, owner, board, lists) = setup().await;
        let mut rx = ctx.subscribe(&board.id);
        let order = vec![lists[1].id.clone(), lists[0].id.clone(), lists[2].id.clone()];

        EditBoard::new(board.id.clone(), owner.id.clone())
            .with_list_order(order.clone())
            .execute(&ctx)
            .await
            .unwrap();

        let event = rx.try_recv().unwrap();
        let BoardEvent::BoardEdited(view) = event else {
            panic!("expected board-edited, got {}", event.name());
        };
        let broadcast_order: Vec<_> = view.lists.iter().map(|l| l.id.clone()).collect();
        assert_eq!(broadcast_order, order);
    }
}
