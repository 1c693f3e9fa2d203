//! Object storage API trait

use async_trait::async_trait;

use crate::client::models::PutObjectRequest;
use crate::error::Result;

/// Object uploads
#[async_trait]
pub trait ObjectStoreApi: Send + Sync {
    /// Upload one object, replacing any existing object under the key
    async fn put_object(&self, request: PutObjectRequest) -> Result<()>;
}
