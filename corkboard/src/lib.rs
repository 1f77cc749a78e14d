//! Organization-scoped task board engine
//!
//! This crate implements a collaborative task-board service: boards contain
//! ordered lists, lists contain ordered cards, and every board is scoped to
//! exactly one organization whose members share access. The engine owns the
//! three hard problems:
//!
//! - **Authorization** - every board-scoped mutation passes through a single
//!   chokepoint ([`authz`]) that resolves the target board (walking
//!   card -> list -> board for descendants) and requires the caller to be a
//!   member of the board's owning organization.
//! - **Ordering** - a board's list order and each list's card order are
//!   order-arrays-of-ids. Reordering accepts only a permutation of the
//!   current members; card orders are replaced as whole-list snapshots
//!   (last writer wins, no operational merge).
//! - **Fan-out** - after a mutation commits, a change event is published on
//!   the board's broadcast channel ([`broadcast`]). Publishing is
//!   fire-and-forget: delivery failure never fails the mutation.
//!
//! Storage is behind the [`store::Store`] seam - a transactional document
//! store reachable by primary key and simple filter queries, with
//! per-document atomicity only. [`store::MemoryStore`] is the in-process
//! implementation.
//!
//! ## Basic Usage
//!
//! ```rust,no_run
//! use corkboard::{board::CreateBoard, org::CreateOrg, CorkboardContext, Execute};
//! use corkboard::store::MemoryStore;
//! use corkboard::types::{OrgId, UserId};
//! use std::sync::Arc;
//!
//! # async fn example(owner: UserId) -> Result<(), Box<dyn std::error::Error>> {
//! let ctx = CorkboardContext::new(Arc::new(MemoryStore::new()), b"signing-secret");
//!
//! let org = CreateOrg::new("Engineering", "hunter2", owner.clone())
//!     .execute(&ctx)
//!     .await?;
//! let org_id = OrgId::from_string(org["id"].as_str().unwrap());
//!
//! let board = CreateBoard::new("Sprint 12", org_id, owner)
//!     .with_background_url("https://example.com/bg.png")
//!     .execute(&ctx)
//!     .await?;
//! println!("created board {}", board["id"]);
//! # Ok(())
//! # }
//! ```

pub mod authz;
pub mod broadcast;
mod context;
pub mod defaults;
mod error;
mod operation;
pub mod session;
pub mod store;
pub mod types;

// Command modules
pub mod activity;
pub mod assignment;
pub mod board;
pub mod card;
pub mod list;
pub mod org;

pub use context::CorkboardContext;
pub use error::{CorkboardError, Result};
pub use operation::Execute;

// Re-export commonly used types
pub use broadcast::{BoardEvent, Broadcaster};
pub use session::{Session, TokenSigner};
pub use types::{
    Activity, ActivityId, Assignment, AssignmentId, Board, BoardId, BoardView, Card, CardId, List,
    ListId, ListView, OrgId, OrgView, Organization, User, UserId, UserView,
};
