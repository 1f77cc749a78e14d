//! CreateAssignment command

use crate::context::CorkboardContext;
use crate::error::{CorkboardError, Result};
use crate::operation::Execute;
use crate::store::Store;
use crate::types::{Assignment, CardId, UserId};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;

/// Assign a user to a card.
///
/// Uniqueness per (user, card) pair is enforced by scanning the user's
/// current assignments before inserting - the store provides no unique
/// index, so the scan-then-insert IS the invariant, best effort under
/// concurrency.
#[derive(Debug, Deserialize)]
pub struct CreateAssignment {
    /// The user to assign
    pub user: UserId,
    /// The card to assign them to
    pub card: CardId,
}

impl CreateAssignment {
    /// Create a new CreateAssignment command
    pub fn new(user: impl Into<UserId>, card: impl Into<CardId>) -> Self {
        Self {
            user: user.into(),
            card: card.into(),
        }
    }
}

#[async_trait]
impl Execute<CorkboardContext, CorkboardError> for CreateAssignment {
    async fn execute(&self, ctx: &CorkboardContext) -> Result<Value> {
        let user = ctx.read_user(&self.user).await?;
        let card = ctx.read_card(&self.card).await?;

        let existing = ctx.store().assignments_by_user(&user.id).await?;
        if existing.iter().any(|a| a.card == card.id) {
            return Err(CorkboardError::DuplicateAssignment {
                user: user.id.to_string(),
                card: card.id.to_string(),
            });
        }

        let assignment = Assignment::new(user.id.clone(), card.id.clone());
        ctx.store().write_assignment(&assignment).await?;

        tracing::info!(user = %user.id, card = %card.id, "assignment created");
        Ok(serde_json::to_value(&assignment)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{MemoryStore, Store};
    use crate::types::{Card, ListId, User};
    use std::sync::Arc;

    async fn setup() -> (CorkboardContext, User, Card) {
        let ctx = CorkboardContext::new(Arc::new(MemoryStore::new()), b"test-secret".to_vec());
        let user = User::new("kim", "kim@example.com", "opaque");
        let card = Card::new("Fix bug", ListId::new());
        ctx.store().write_user(&user).await.unwrap();
        ctx.store().write_card(&card).await.unwrap();
        (ctx, user, card)
    }

    #[tokio::test]
    async fn test_second_assignment_for_same_pair_fails() {
        let (ctx, user, card) = setup().await;

        let first = CreateAssignment::new(user.id.clone(), card.id.clone())
            .execute(&ctx)
            .await
            .unwrap();
        assert_eq!(first["user"], user.id.as_str());
        assert_eq!(first["card"], card.id.as_str());

        let second = CreateAssignment::new(user.id.clone(), card.id.clone())
            .execute(&ctx)
            .await;
        assert!(matches!(
            second,
            Err(CorkboardError::DuplicateAssignment { .. })
        ));
    }

    #[tokio::test]
    async fn test_same_user_different_cards_is_fine() {
        let (ctx, user, card) = setup().await;
        let other = Card::new("Another", ListId::new());
        ctx.store().write_card(&other).await.unwrap();

        CreateAssignment::new(user.id.clone(), card.id.clone())
            .execute(&ctx)
            .await
            .unwrap();
        CreateAssignment::new(user.id.clone(), other.id.clone())
            .execute(&ctx)
            .await
            .unwrap();

        let all = ctx.store().assignments_by_user(&user.id).await.unwrap();
        assert_eq!(all.len(), 2);
    }

    #[tokio::test]
    async fn test_unknown_user_or_card_fails() {
        let (ctx, user, card) = setup().await;

        let result = CreateAssignment::new(UserId::new(), card.id.clone())
            .execute(&ctx)
            .await;
        assert!(matches!(result, Err(CorkboardError::UserNotFound { .. })));

        let result = CreateAssignment::new(user.id.clone(), CardId::new())
            .execute(&ctx)
            .await;
        assert!(matches!(result, Err(CorkboardError::CardNotFound { .. })));
    }
}
