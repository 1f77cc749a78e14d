//! DeleteCard command

use crate::activity::record;
use crate::authz::authorize_card;
use crate::broadcast::BoardEvent;
use crate::context::CorkboardContext;
use crate::error::{CorkboardError, Result};
use crate::operation::Execute;
use crate::store::Store;
use crate::types::{CardId, OrgId, UserId};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;

/// Delete a card.
///
/// The card document is removed; the owning list's order array keeps the
/// stale id until the next whole-list reorder overwrites it. Reads skip
/// dangling references, and subscribers remove the card by id from the
/// `card-deleted` payload.
#[derive(Debug, Deserialize)]
pub struct DeleteCard {
    /// The card to delete
    pub card: CardId,
    /// The caller; must be a member of the owning organization
    pub actor: UserId,
    /// The organization to record the deletion under
    pub organization: OrgId,
}

impl DeleteCard {
    /// Create a new DeleteCard command
    pub fn new(
        card: impl Into<CardId>,
        actor: impl Into<UserId>,
        organization: impl Into<OrgId>,
    ) -> Self {
        Self {
            card: card.into(),
            actor: actor.into(),
            organization: organization.into(),
        }
    }
}

#[async_trait]
impl Execute<CorkboardContext, CorkboardError> for DeleteCard {
    async fn execute(&self, ctx: &CorkboardContext) -> Result<Value> {
        let (card, _list, board) = authorize_card(ctx, &self.card, &self.actor).await?;

        ctx.store().delete_card(&card.id).await?;

        record(
            ctx,
            &self.actor,
            &self.organization,
            Some(&board.id),
            format!("Deleted card {}", card.name),
        )
        .await?;

        ctx.publish(&board.id, BoardEvent::CardDeleted(card.clone()));

        tracing::info!(card = %card.id, "card deleted");
        Ok(serde_json::json!({ "deleted": true, "id": card.id }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{MemoryStore, Store};
    use crate::types::{Board, Card, List, Organization, User};
    use std::sync::Arc;

    async fn setup() -> (CorkboardContext, User, Board, Card) {
        let ctx = CorkboardContext::new(Arc::new(MemoryStore::new()), b"test-secret".to_vec());

        let mut owner = User::new("owner", "owner@example.com", "opaque");
        let org = Organization::new("Eng", "pw", owner.id.clone());
        owner.joined_organizations.push(org.id.clone());

        let mut board = Board::new("Sprint", "", org.id.clone());
        let mut list = List::new("Todo", board.id.clone());
        let card = Card::new("Fix bug", list.id.clone());
        list.cards.push(card.id.clone());
        board.lists.push(list.id.clone());

        ctx.store().write_user(&owner).await.unwrap();
        ctx.store().write_org(&org).await.unwrap();
        ctx.store().write_board(&board).await.unwrap();
        ctx.store().write_list(&list).await.unwrap();
        ctx.store().write_card(&card).await.unwrap();

        (ctx, owner, board, card)
    }

    #[tokio::test]
    async fn test_delete_broadcasts_the_dead_card() {
        let (ctx, owner, board, card) = setup().await;
        let mut rx = ctx.subscribe(&board.id);

        let result = DeleteCard::new(card.id.clone(), owner.id.clone(), board.organization.clone())
            .execute(&ctx)
            .await
            .unwrap();
        assert_eq!(result["deleted"], true);
        assert!(ctx.store().read_card(&card.id).await.unwrap().is_none());

        let event = rx.try_recv().unwrap();
        assert_eq!(event.name(), "card-deleted");
        let BoardEvent::CardDeleted(dead) = event else {
            unreachable!()
        };
        assert_eq!(dead.id, card.id);
    }

    #[tokio::test]
    async fn test_populated_reads_skip_the_dangling_reference() {
        let (ctx, owner, board, card) = setup().await;

        DeleteCard::new(card.id.clone(), owner.id.clone(), board.organization.clone())
            .execute(&ctx)
            .await
            .unwrap();

        let result = crate::board::GetBoard::new(board.id.clone(), owner.id.clone())
            .execute(&ctx)
            .await
            .unwrap();
        assert_eq!(result["lists"][0]["cards"].as_array().unwrap().len(), 0);
    }
}
