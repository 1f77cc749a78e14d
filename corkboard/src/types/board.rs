//! Board hierarchy types: Board, List, Card
//!
//! Ordering is order-array-of-ids at every level: a board's `lists` and a
//! list's `cards` are the authoritative sequences. Child documents carry a
//! back-reference to their parent, but the parent's array decides order.

use super::ids::{BoardId, CardId, ListId, OrgId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A board - an ordered collection of lists, scoped to one organization
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Board {
    pub id: BoardId,
    pub name: String,
    /// The owning organization; membership in it gates every mutation
    /// under this board
    pub organization: OrgId,
    pub background_url: String,
    /// Authoritative list order
    #[serde(default)]
    pub lists: Vec<ListId>,
}

impl Board {
    /// Create a new empty board
    pub fn new(
        name: impl Into<String>,
        background_url: impl Into<String>,
        organization: OrgId,
    ) -> Self {
        Self {
            id: BoardId::new(),
            name: name.into(),
            organization,
            background_url: background_url.into(),
            lists: Vec::new(),
        }
    }
}

/// A list - an ordered collection of cards within one board
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct List {
    pub id: ListId,
    pub name: String,
    pub board: BoardId,
    /// Authoritative card order
    #[serde(default)]
    pub cards: Vec<CardId>,
}

impl List {
    /// Create a new empty list
    pub fn new(name: impl Into<String>, board: BoardId) -> Self {
        Self {
            id: ListId::new(),
            name: name.into(),
            board,
            cards: Vec::new(),
        }
    }
}

/// A card - the leaf work item, scoped to one list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub name: String,
    pub list: ListId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,
}

impl Card {
    /// Create a new card
    pub fn new(name: impl Into<String>, list: ListId) -> Self {
        Self {
            id: CardId::new(),
            name: name.into(),
            list,
            priority: None,
            due_date: None,
        }
    }

    /// Set the priority
    pub fn with_priority(mut self, priority: impl Into<String>) -> Self {
        self.priority = Some(priority.into());
        self
    }

    /// Set the due date
    pub fn with_due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = Some(due_date);
        self
    }
}
