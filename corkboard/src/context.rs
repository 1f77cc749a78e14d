//! CorkboardContext - shared handles for engine operations
//!
//! The context provides access, not logic: the document store, the
//! realtime broadcaster, and the session signer. Operations do all the
//! work. Typed read helpers map a missing document to the matching
//! not-found error so call sites can use `?` directly.

use crate::broadcast::{BoardEvent, Broadcaster};
use crate::defaults::BROADCAST_CHANNEL_CAPACITY;
use crate::error::{CorkboardError, Result};
use crate::session::TokenSigner;
use crate::store::Store;
use crate::types::{
    Assignment, AssignmentId, Board, BoardId, Card, CardId, List, ListId, OrgId, Organization,
    User, UserId,
};
use std::sync::Arc;
use tokio::sync::broadcast;

/// Context passed to every operation
pub struct CorkboardContext {
    store: Arc<dyn Store>,
    broadcaster: Broadcaster,
    signer: TokenSigner,
}

impl CorkboardContext {
    /// Create a context over a store with the given session signing secret
    pub fn new(store: Arc<dyn Store>, secret: impl Into<Vec<u8>>) -> Self {
        Self {
            store,
            broadcaster: Broadcaster::new(BROADCAST_CHANNEL_CAPACITY),
            signer: TokenSigner::new(secret),
        }
    }

    /// The document store
    pub fn store(&self) -> &dyn Store {
        self.store.as_ref()
    }

    /// The session signer/verifier
    pub fn signer(&self) -> &TokenSigner {
        &self.signer
    }

    /// Subscribe to a board's change events
    pub fn subscribe(&self, board: &BoardId) -> broadcast::Receiver<BoardEvent> {
        self.broadcaster.subscribe(board)
    }

    /// Publish a change event on a board's channel.
    ///
    /// Fire-and-forget: called after the primary save; delivery failure
    /// never fails the originating mutation.
    pub fn publish(&self, board: &BoardId, event: BoardEvent) {
        self.broadcaster.publish(board, event);
    }

    // =========================================================================
    // Typed reads - a missing document becomes the matching error
    // =========================================================================

    /// Load a user or fail with `UserNotFound`
    pub async fn read_user(&self, id: &UserId) -> Result<User> {
        self.store
            .read_user(id)
            .await?
            .ok_or_else(|| CorkboardError::user_not_found(id.as_str()))
    }

    /// Load an organization or fail with `OrgNotFound`
    pub async fn read_org(&self, id: &OrgId) -> Result<Organization> {
        self.store
            .read_org(id)
            .await?
            .ok_or_else(|| CorkboardError::org_not_found(id.as_str()))
    }

    /// Load a board or fail with `BoardNotFound`
    pub async fn read_board(&self, id: &BoardId) -> Result<Board> {
        self.store
            .read_board(id)
            .await?
            .ok_or_else(|| CorkboardError::board_not_found(id.as_str()))
    }

    /// Load a list or fail with `ListNotFound`
    pub async fn read_list(&self, id: &ListId) -> Result<List> {
        self.store
            .read_list(id)
            .await?
            .ok_or_else(|| CorkboardError::list_not_found(id.as_str()))
    }

    /// Load a card or fail with `CardNotFound`
    pub async fn read_card(&self, id: &CardId) -> Result<Card> {
        self.store
            .read_card(id)
            .await?
            .ok_or_else(|| CorkboardError::card_not_found(id.as_str()))
    }

    /// Load an assignment or fail with `NotFound`
    pub async fn read_assignment(&self, id: &AssignmentId) -> Result<Assignment> {
        self.store
            .read_assignment(id)
            .await?
            .ok_or_else(|| CorkboardError::not_found("assignment", id.as_str()))
    }
}
