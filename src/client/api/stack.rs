//! Stack description API trait

use async_trait::async_trait;

use crate::client::models::StackDescription;
use crate::error::Result;

/// Read-only access to deployed stacks
#[async_trait]
pub trait StackApi: Send + Sync {
    /// Describe a stack by name.
    ///
    /// Returns an empty list when the stack does not exist.
    async fn describe_stacks(&self, stack_name: &str) -> Result<Vec<StackDescription>>;
}
