//! Realtime fan-out to board subscribers
//!
//! Each board gets its own publish/subscribe channel, created lazily on
//! first use. Events are published after the originating mutation commits;
//! publishing never fails the mutation - a board with no subscribers or a
//! lagging receiver just drops events.

use crate::types::{BoardId, BoardView, Card, List, UserId};
use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

/// A change notification on a board's channel.
///
/// Serializes as `{"event": "<name>", "data": ...}` - the event names and
/// payload shapes are the wire contract consumers rely on.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "kebab-case")]
pub enum BoardEvent {
    /// The full board after an edit (rename, background, reorder)
    BoardEdited(BoardView),
    ListCreated { sender: UserId, list: List },
    ListDeleted { sender: UserId, list: List },
    ListEdited { sender: UserId, list: List },
    CardAdded { sender: UserId, card: Card },
    /// Receivers must treat this as "remove by id"
    CardDeleted(Card),
    CardEdited(Card),
}

impl BoardEvent {
    /// The wire name of this event
    pub fn name(&self) -> &'static str {
        match self {
            Self::BoardEdited(_) => "board-edited",
            Self::ListCreated { .. } => "list-created",
            Self::ListDeleted { .. } => "list-deleted",
            Self::ListEdited { .. } => "list-edited",
            Self::CardAdded { .. } => "card-added",
            Self::CardDeleted(_) => "card-deleted",
            Self::CardEdited(_) => "card-edited",
        }
    }
}

/// Per-board broadcast channels
pub struct Broadcaster {
    channels: DashMap<BoardId, broadcast::Sender<BoardEvent>>,
    capacity: usize,
}

impl Broadcaster {
    /// Create a broadcaster whose channels buffer `capacity` events
    pub fn new(capacity: usize) -> Self {
        Self {
            channels: DashMap::new(),
            capacity,
        }
    }

    /// Subscribe to a board's channel, creating it if needed
    pub fn subscribe(&self, board: &BoardId) -> broadcast::Receiver<BoardEvent> {
        self.channels
            .entry(board.clone())
            .or_insert_with(|| broadcast::channel(self.capacity).0)
            .value()
            .subscribe()
    }

    /// Publish an event to a board's subscribers, if any
    pub fn publish(&self, board: &BoardId, event: BoardEvent) {
        let Some(sender) = self.channels.get(board) else {
            tracing::debug!(board = %board, event = event.name(), "no channel for board, dropping event");
            return;
        };
        match sender.send(event) {
            Ok(receivers) => {
                tracing::debug!(board = %board, receivers, "event delivered");
            }
            Err(broadcast::error::SendError(event)) => {
                tracing::warn!(board = %board, event = event.name(), "no active subscribers, event dropped");
            }
        }
    }
}
