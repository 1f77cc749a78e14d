//! DeleteAssignment command

use crate::context::CorkboardContext;
use crate::error::{CorkboardError, Result};
use crate::operation::Execute;
use crate::store::Store;
use crate::types::AssignmentId;
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;

/// Remove an assignment by id
#[derive(Debug, Deserialize)]
pub struct DeleteAssignment {
    /// The assignment to remove
    pub assignment: AssignmentId,
}

impl DeleteAssignment {
    /// Create a new DeleteAssignment command
    pub fn new(assignment: impl Into<AssignmentId>) -> Self {
        Self {
            assignment: assignment.into(),
        }
    }
}

#[async_trait]
impl Execute<CorkboardContext, CorkboardError> for DeleteAssignment {
    async fn execute(&self, ctx: &CorkboardContext) -> Result<Value> {
        let assignment = ctx.read_assignment(&self.assignment).await?;
        ctx.store().delete_assignment(&assignment.id).await?;
        Ok(serde_json::json!({ "deleted": true, "id": assignment.id }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{MemoryStore, Store};
    use crate::types::{Assignment, CardId, UserId};
    use std::sync::Arc;

    #[tokio::test]
    async fn test_delete_assignment() {
        let ctx = CorkboardContext::new(Arc::new(MemoryStore::new()), b"test-secret".to_vec());
        let assignment = Assignment::new(UserId::new(), CardId::new());
        ctx.store().write_assignment(&assignment).await.unwrap();

        DeleteAssignment::new(assignment.id.clone())
            .execute(&ctx)
            .await
            .unwrap();
        assert!(ctx
            .store()
            .read_assignment(&assignment.id)
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn test_unknown_assignment_fails() {
        let ctx = CorkboardContext::new(Arc::new(MemoryStore::new()), b"test-secret".to_vec());
        let result = DeleteAssignment::new(AssignmentId::new()).execute(&ctx).await;
        assert!(matches!(result, Err(CorkboardError::NotFound { .. })));
    }
}
