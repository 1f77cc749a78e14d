//! The `Execute` trait for defining engine operations
//!
//! Operations are structs where the fields ARE the parameters. Each
//! operation file pairs a command struct with an `Execute` impl that
//! performs the authorize-read-mutate-save sequence against the context.

use async_trait::async_trait;
use serde_json::Value;

/// An executable operation against a context `C`, failing with `E`
#[async_trait]
pub trait Execute<C, E>
where
    C: Sync,
{
    /// Run the operation and return its JSON result
    async fn execute(&self, ctx: &C) -> std::result::Result<Value, E>;
}
