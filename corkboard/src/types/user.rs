//! User types: the identity directory record and its public view

use super::ids::{OrgId, UserId};
use serde::{Deserialize, Serialize};

/// A registered user as stored in the identity directory.
///
/// Credential issuance (registration, login, password reset) lives outside
/// the engine; `hashed_password` is carried as an opaque string so the
/// record round-trips intact.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub email: String,
    pub hashed_password: String,
    /// Organizations this user belongs to. Kept in sync with
    /// `Organization::members` by the org operations.
    #[serde(default)]
    pub joined_organizations: Vec<OrgId>,
}

impl User {
    /// Create a new user record
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        hashed_password: impl Into<String>,
    ) -> Self {
        Self {
            id: UserId::new(),
            username: username.into(),
            email: email.into(),
            hashed_password: hashed_password.into(),
            joined_organizations: Vec::new(),
        }
    }

    /// The secret-free view of this user
    pub fn view(&self) -> UserView {
        UserView {
            id: self.id.clone(),
            username: self.username.clone(),
            email: self.email.clone(),
        }
    }
}

/// Public user view with secrets and membership list stripped
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserView {
    pub id: UserId,
    pub username: String,
    pub email: String,
}
