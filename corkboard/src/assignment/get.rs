//! Assignment read commands

use crate::context::CorkboardContext;
use crate::error::{CorkboardError, Result};
use crate::operation::Execute;
use crate::store::Store;
use crate::types::{CardId, UserId};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;

/// List a card's assignments with each assignee resolved to a
/// secret-free user view
#[derive(Debug, Deserialize)]
pub struct ListCardAssignments {
    /// The card whose assignments to list
    pub card: CardId,
}

impl ListCardAssignments {
    /// Create a new ListCardAssignments command
    pub fn new(card: impl Into<CardId>) -> Self {
        Self { card: card.into() }
    }
}

#[async_trait]
impl Execute<CorkboardContext, CorkboardError> for ListCardAssignments {
    async fn execute(&self, ctx: &CorkboardContext) -> Result<Value> {
        let assignments = ctx.store().assignments_by_card(&self.card).await?;

        let mut populated = Vec::with_capacity(assignments.len());
        for assignment in &assignments {
            let user = ctx.read_user(&assignment.user).await?;
            populated.push(serde_json::json!({
                "id": assignment.id,
                "card": assignment.card,
                "user": user.view(),
            }));
        }
        Ok(Value::Array(populated))
    }
}

/// List a user's assignments with each card resolved
#[derive(Debug, Deserialize)]
pub struct ListUserAssignments {
    /// The user whose assignments to list
    pub user: UserId,
}

impl ListUserAssignments {
    /// Create a new ListUserAssignments command
    pub fn new(user: impl Into<UserId>) -> Self {
        Self { user: user.into() }
    }
}

#[async_trait]
impl Execute<CorkboardContext, CorkboardError> for ListUserAssignments {
    async fn execute(&self, ctx: &CorkboardContext) -> Result<Value> {
        let assignments = ctx.store().assignments_by_user(&self.user).await?;

        let mut populated = Vec::with_capacity(assignments.len());
        for assignment in &assignments {
            let card = ctx.read_card(&assignment.card).await?;
            populated.push(serde_json::json!({
                "id": assignment.id,
                "user": assignment.user,
                "card": card,
            }));
        }
        Ok(Value::Array(populated))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assignment::CreateAssignment;
    use crate::store::{MemoryStore, Store};
    use crate::types::{Card, ListId, User};
    use std::sync::Arc;

    async fn setup() -> (CorkboardContext, User, Card) {
        let ctx = CorkboardContext::new(Arc::new(MemoryStore::new()), b"test-secret".to_vec());
        let user = User::new("kim", "kim@example.com", "opaque");
        let card = Card::new("Fix bug", ListId::new());
        ctx.store().write_user(&user).await.unwrap();
        ctx.store().write_card(&card).await.unwrap();
        CreateAssignment::new(user.id.clone(), card.id.clone())
            .execute(&ctx)
            .await
            .unwrap();
        (ctx, user, card)
    }

    #[tokio::test]
    async fn test_card_assignments_strip_user_secrets() {
        let (ctx, user, card) = setup().await;

        let result = ListCardAssignments::new(card.id.clone())
            .execute(&ctx)
            .await
            .unwrap();
        let entries = result.as_array().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0]["user"]["id"], user.id.as_str());
        assert!(entries[0]["user"].get("hashed_password").is_none());
    }

    #[tokio::test]
    async fn test_user_assignments_resolve_cards() {
        let (ctx, user, card) = setup().await;

        let result = ListUserAssignments::new(user.id.clone())
            .execute(&ctx)
            .await
            .unwrap();
        let entries = result.as_array().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0]["card"]["id"], card.id.as_str());
        assert_eq!(entries[0]["card"]["name"], "Fix bug");
    }
}
