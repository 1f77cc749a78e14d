//! The document-store seam
//!
//! The engine treats durable storage as an external collaborator: a
//! transactional document store reachable by primary key and the handful
//! of filter queries below. The contract is per-document atomicity only -
//! a write replaces one document; there are no cross-document
//! transactions, so concurrent writes to the same document are last
//! writer wins and multi-document mutations are non-atomic.

mod memory;

pub use memory::MemoryStore;

use crate::error::Result;
use crate::types::{
    Activity, ActivityId, Assignment, AssignmentId, Board, BoardId, Card, CardId, List, ListId,
    OrgId, Organization, User, UserId,
};
use async_trait::async_trait;

/// Primary-key and filter access to the persisted entities.
///
/// Reads return `None` for unknown ids; the context layer maps that to
/// the typed not-found errors. Filter queries return deterministic
/// sequences: id order, except activity which sorts by timestamp (append
/// order).
#[async_trait]
pub trait Store: Send + Sync {
    // Users
    async fn read_user(&self, id: &UserId) -> Result<Option<User>>;
    async fn write_user(&self, user: &User) -> Result<()>;

    // Organizations
    async fn read_org(&self, id: &OrgId) -> Result<Option<Organization>>;
    async fn write_org(&self, org: &Organization) -> Result<()>;
    async fn delete_org(&self, id: &OrgId) -> Result<()>;
    async fn orgs_by_member(&self, user: &UserId) -> Result<Vec<Organization>>;
    async fn all_orgs(&self) -> Result<Vec<Organization>>;

    // Boards
    async fn read_board(&self, id: &BoardId) -> Result<Option<Board>>;
    async fn write_board(&self, board: &Board) -> Result<()>;
    async fn delete_board(&self, id: &BoardId) -> Result<()>;
    async fn boards_by_org(&self, org: &OrgId) -> Result<Vec<Board>>;

    // Lists
    async fn read_list(&self, id: &ListId) -> Result<Option<List>>;
    async fn write_list(&self, list: &List) -> Result<()>;
    async fn delete_list(&self, id: &ListId) -> Result<()>;

    // Cards
    async fn read_card(&self, id: &CardId) -> Result<Option<Card>>;
    async fn write_card(&self, card: &Card) -> Result<()>;
    async fn delete_card(&self, id: &CardId) -> Result<()>;

    // Assignments
    async fn read_assignment(&self, id: &AssignmentId) -> Result<Option<Assignment>>;
    async fn write_assignment(&self, assignment: &Assignment) -> Result<()>;
    async fn delete_assignment(&self, id: &AssignmentId) -> Result<()>;
    async fn assignments_by_user(&self, user: &UserId) -> Result<Vec<Assignment>>;
    async fn assignments_by_card(&self, card: &CardId) -> Result<Vec<Assignment>>;

    // Activity
    async fn write_activity(&self, activity: &Activity) -> Result<()>;
    async fn read_activity(&self, id: &ActivityId) -> Result<Option<Activity>>;
    async fn activity_by_org(&self, org: &OrgId) -> Result<Vec<Activity>>;
    async fn delete_activity_by_org(&self, org: &OrgId) -> Result<()>;
}
