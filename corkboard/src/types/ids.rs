//! Strongly-typed identifiers
//!
//! Every entity gets its own ULID-backed newtype so ids of different
//! entities cannot be mixed up at compile time. The inner representation
//! stays a string so externally minted ids round-trip unchanged.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! entity_id {
    ($name:ident, $doc:literal) => {
        #[doc = $doc]
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Generate a new ULID-backed id
            pub fn new() -> Self {
                Self(ulid::Ulid::new().to_string())
            }

            /// Wrap an existing id string
            pub fn from_string(s: impl Into<String>) -> Self {
                Self(s.into())
            }

            /// The id as a string slice
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }
    };
}

entity_id!(UserId, "Identifies a registered user");
entity_id!(OrgId, "Identifies an organization");
entity_id!(BoardId, "Identifies a board");
entity_id!(ListId, "Identifies a list within a board");
entity_id!(CardId, "Identifies a card within a list");
entity_id!(AssignmentId, "Identifies a user-card assignment");
entity_id!(ActivityId, "Identifies an activity log entry");
