//! Appending activity entries
//!
//! Every mutating operation feeds the recorder. An entry is written as its
//! own document and its id is appended to the owning organization's
//! back-reference list.

use crate::context::CorkboardContext;
use crate::error::Result;
use crate::store::Store;
use crate::types::{Activity, BoardId, OrgId, UserId};

/// Append an activity entry for a mutation in `organization`
pub(crate) async fn record(
    ctx: &CorkboardContext,
    user: &UserId,
    organization: &OrgId,
    board: Option<&BoardId>,
    action: impl Into<String>,
) -> Result<Activity> {
    let entry = Activity::new(
        user.clone(),
        organization.clone(),
        board.cloned(),
        action.into(),
    );
    ctx.store().write_activity(&entry).await?;

    let mut org = ctx.read_org(organization).await?;
    org.activity.push(entry.id.clone());
    ctx.store().write_org(&org).await?;

    tracing::debug!(org = %organization, user = %user, action = %entry.action, "activity recorded");
    Ok(entry)
}
