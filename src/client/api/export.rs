//! Documentation export API trait

use async_trait::async_trait;

use crate::client::models::ExportRequest;
use crate::error::Result;

/// Managed documentation export
#[async_trait]
pub trait ExportApi: Send + Sync {
    /// Request an export; `None` when the service returned no body.
    async fn get_export(&self, request: &ExportRequest) -> Result<Option<Vec<u8>>>;
}
