//! Organization commands: membership is the authorization boundary

mod create;
mod delete;
mod edit;
mod get;
mod join;
mod kick;
mod leave;

pub use create::CreateOrg;
pub use delete::DeleteOrg;
pub use edit::EditOrg;
pub use get::{GetOrg, ListAllOrgs, ListOrgs};
pub use join::JoinOrg;
pub use kick::KickMember;
pub use leave::LeaveOrg;
