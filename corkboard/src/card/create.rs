//! CreateCard command

use crate::activity::record;
use crate::authz::authorize_list;
use crate::broadcast::BoardEvent;
use crate::context::CorkboardContext;
use crate::error::{CorkboardError, Result};
use crate::operation::Execute;
use crate::store::Store;
use crate::types::{Card, ListId, OrgId, UserId};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;

/// Create a card on a list. New cards always land last in the list's
/// card order.
#[derive(Debug, Deserialize)]
pub struct CreateCard {
    /// The card content
    pub name: String,
    /// The list to add the card to
    pub list: ListId,
    /// The caller; must be a member of the owning organization
    pub actor: UserId,
    /// The organization to record the creation under
    pub organization: OrgId,
}

impl CreateCard {
    /// Create a new CreateCard command
    pub fn new(
        name: impl Into<String>,
        list: impl Into<ListId>,
        actor: impl Into<UserId>,
        organization: impl Into<OrgId>,
    ) -> Self {
        Self {
            name: name.into(),
            list: list.into(),
            actor: actor.into(),
            organization: organization.into(),
        }
    }
}

#[async_trait]
impl Execute<CorkboardContext, CorkboardError> for CreateCard {
    async fn execute(&self, ctx: &CorkboardContext) -> Result<Value> {
        let (mut list, board) = authorize_list(ctx, &self.list, &self.actor).await?;

        let card = Card::new(&self.name, list.id.clone());
        // Child saved before the list reference that depends on it
        ctx.store().write_card(&card).await?;

        list.cards.push(card.id.clone());
        ctx.store().write_list(&list).await?;

        record(
            ctx,
            &self.actor,
            &self.organization,
            Some(&board.id),
            format!("Created card {} on list {}", card.name, list.name),
        )
        .await?;

        ctx.publish(
            &board.id,
            BoardEvent::CardAdded {
                sender: self.actor.clone(),
                card: card.clone(),
            },
        );

        tracing::info!(card = %card.id, list = %list.id, "card created");
        Ok(serde_json::to_value(&card)?)
    }
}
