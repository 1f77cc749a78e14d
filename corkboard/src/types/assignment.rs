//! Assignment types: the user-card link

use super::ids::{AssignmentId, CardId, UserId};
use serde::{Deserialize, Serialize};

/// A link assigning a user to a card.
///
/// At most one assignment may exist per (user, card) pair; the create
/// operation enforces this by scanning the user's current assignments
/// before inserting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assignment {
    pub id: AssignmentId,
    pub user: UserId,
    pub card: CardId,
}

impl Assignment {
    /// Create a new assignment
    pub fn new(user: UserId, card: CardId) -> Self {
        Self {
            id: AssignmentId::new(),
            user,
            card,
        }
    }
}
