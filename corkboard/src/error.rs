//! Error types for the board engine

use thiserror::Error;

/// Result type for board engine operations
pub type Result<T> = std::result::Result<T, CorkboardError>;

/// Errors that can occur in board engine operations
#[derive(Debug, Error)]
pub enum CorkboardError {
    /// Caller is not a member of the owning organization, or the session is bad
    #[error("unauthorized")]
    Unauthorized,

    /// Board not found
    #[error("board not found: {id}")]
    BoardNotFound { id: String },

    /// List not found
    #[error("list not found: {id}")]
    ListNotFound { id: String },

    /// Card not found
    #[error("card not found: {id}")]
    CardNotFound { id: String },

    /// Organization not found
    #[error("organization not found: {id}")]
    OrgNotFound { id: String },

    /// User not found
    #[error("user not found: {id}")]
    UserNotFound { id: String },

    /// Generic resource not found (assignments, activity entries)
    #[error("{resource} not found: {id}")]
    NotFound { resource: String, id: String },

    /// Reorder payload cardinality does not match the board structure
    #[error("order has {actual} entries, board has {expected}")]
    InvalidOrderShape { expected: usize, actual: usize },

    /// Reorder payload references an id the parent does not currently own
    #[error("order references unknown id: {id}")]
    ReferenceNotFound { id: String },

    /// Organization board quota reached
    #[error("organization already owns the maximum of {limit} boards")]
    QuotaExceeded { limit: usize },

    /// Organization password mismatch
    #[error("wrong organization password")]
    WrongPassword,

    /// User is already a member of the organization
    #[error("user {id} is already a member")]
    AlreadyMember { id: String },

    /// User is not a member of the organization
    #[error("user {id} is not a member")]
    NotAMember { id: String },

    /// Removing the owner would orphan the organization
    #[error("the organization owner cannot be removed; transfer ownership first")]
    CannotRemoveOwner,

    /// An assignment for this (user, card) pair already exists
    #[error("user {user} is already assigned to card {card}")]
    DuplicateAssignment { user: String, card: String },

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CorkboardError {
    /// Create a board-not-found error
    pub fn board_not_found(id: impl Into<String>) -> Self {
        Self::BoardNotFound { id: id.into() }
    }

    /// Create a list-not-found error
    pub fn list_not_found(id: impl Into<String>) -> Self {
        Self::ListNotFound { id: id.into() }
    }

    /// Create a card-not-found error
    pub fn card_not_found(id: impl Into<String>) -> Self {
        Self::CardNotFound { id: id.into() }
    }

    /// Create an organization-not-found error
    pub fn org_not_found(id: impl Into<String>) -> Self {
        Self::OrgNotFound { id: id.into() }
    }

    /// Create a user-not-found error
    pub fn user_not_found(id: impl Into<String>) -> Self {
        Self::UserNotFound { id: id.into() }
    }

    /// Create a generic not-found error
    pub fn not_found(resource: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            resource: resource.into(),
            id: id.into(),
        }
    }

    /// Check if this error means the target entity does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::BoardNotFound { .. }
                | Self::ListNotFound { .. }
                | Self::CardNotFound { .. }
                | Self::OrgNotFound { .. }
                | Self::UserNotFound { .. }
                | Self::NotFound { .. }
        )
    }
}
