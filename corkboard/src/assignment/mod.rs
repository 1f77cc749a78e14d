//! Assignment commands: linking users to cards

mod create;
mod delete;
mod get;

pub use create::CreateAssignment;
pub use delete::DeleteAssignment;
pub use get::{ListCardAssignments, ListUserAssignments};
