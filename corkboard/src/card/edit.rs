//! EditCard command

use crate::activity::record;
use crate::authz::authorize_card;
use crate::broadcast::BoardEvent;
use crate::context::CorkboardContext;
use crate::error::{CorkboardError, Result};
use crate::operation::Execute;
use crate::store::Store;
use crate::types::{CardId, OrgId, UserId};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;

/// Partially update a card. Only provided fields change; absent fields
/// keep their prior value - there is no way to clear a field through this
/// operation.
#[derive(Debug, Deserialize)]
pub struct EditCard {
    /// The card to edit
    pub card: CardId,
    /// The caller; must be a member of the owning organization
    pub actor: UserId,
    /// The organization to record the edit under
    pub organization: OrgId,
    /// New content
    pub name: Option<String>,
    /// New priority
    pub priority: Option<String>,
    /// New due date
    pub due_date: Option<DateTime<Utc>>,
}

impl EditCard {
    /// Create a new EditCard command
    pub fn new(
        card: impl Into<CardId>,
        actor: impl Into<UserId>,
        organization: impl Into<OrgId>,
    ) -> Self {
        Self {
            card: card.into(),
            actor: actor.into(),
            organization: organization.into(),
            name: None,
            priority: None,
            due_date: None,
        }
    }

    /// Set the new content
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the new priority
    pub fn with_priority(mut self, priority: impl Into<String>) -> Self {
        self.priority = Some(priority.into());
        self
    }

    /// Set the new due date
    pub fn with_due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = Some(due_date);
        self
    }
}

#[async_trait]
impl Execute<CorkboardContext, CorkboardError> for EditCard {
    async fn execute(&self, ctx: &CorkboardContext) -> Result<Value> {
        let (mut card, _list, board) = authorize_card(ctx, &self.card, &self.actor).await?;

        if let Some(name) = &self.name {
            card.name = name.clone();
        }
        if let Some(priority) = &self.priority {
            card.priority = Some(priority.clone());
        }
        if let Some(due_date) = self.due_date {
            card.due_date = Some(due_date);
        }

        ctx.store().write_card(&card).await?;

        record(
            ctx,
            &self.actor,
            &self.organization,
            Some(&board.id),
            format!("Edited card {}", card.name),
        )
        .await?;

        ctx.publish(&board.id, BoardEvent::CardEdited(card.clone()));

        Ok(serde_json::to_value(&card)?)
    }
}
