//! GetList command

use crate::context::CorkboardContext;
use crate::error::{CorkboardError, Result};
use crate::operation::Execute;
use crate::types::{populate_list, ListId};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;

/// Fetch a list with its card references resolved to full cards.
/// Expansion is one level only - the cards' own references stay ids.
#[derive(Debug, Deserialize)]
pub struct GetList {
    /// The list to fetch
    pub list: ListId,
}

impl GetList {
    /// Create a new GetList command
    pub fn new(list: impl Into<ListId>) -> Self {
        Self { list: list.into() }
    }
}

#[async_trait]
impl Execute<CorkboardContext, CorkboardError> for GetList {
    async fn execute(&self, ctx: &CorkboardContext) -> Result<Value> {
        let list = ctx.read_list(&self.list).await?;
        let view = populate_list(ctx, &list).await?;
        Ok(serde_json::to_value(view)?)
    }
}
