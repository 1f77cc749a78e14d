//! GetCard command

use crate::context::CorkboardContext;
use crate::error::{CorkboardError, Result};
use crate::operation::Execute;
use crate::types::CardId;
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;

/// Fetch a single card
#[derive(Debug, Deserialize)]
pub struct GetCard {
    /// The card to fetch
    pub card: CardId,
}

impl GetCard {
    /// Create a new GetCard command
    pub fn new(card: impl Into<CardId>) -> Self {
        Self { card: card.into() }
    }
}

#[async_trait]
impl Execute<CorkboardContext, CorkboardError> for GetCard {
    async fn execute(&self, ctx: &CorkboardContext) -> Result<Value> {
        let card = ctx.read_card(&self.card).await?;
        Ok(serde_json::to_value(&card)?)
    }
}
