//! Mock AWS client for testing
//!
//! Provides a mock implementation of the API traits for unit testing
//! without making real AWS calls.

use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::Mutex;

use super::api::{ExportApi, ObjectStoreApi, StackApi};
use super::models::{
    ExportRequest, PutObjectRequest, SERVICE_ENDPOINT_OUTPUT, StackDescription, StackOutput,
};
use crate::error::{ApiError, Result};

/// Mock AWS client for testing.
///
/// Configure expected responses via builder methods, then use in tests.
///
/// # Example
/// ```ignore
/// let mock = MockAwsClient::new()
///     .with_service_endpoint("https://abc123.execute-api.us-east-1.amazonaws.com")
///     .await
///     .with_export_body("openapi: 3.0.1")
///     .await;
/// ```
#[derive(Default)]
pub struct MockAwsClient {
    /// Stacks to return from describe_stacks
    stacks: Arc<Mutex<Vec<StackDescription>>>,
    /// Body to return from get_export
    export_body: Arc<Mutex<Option<Vec<u8>>>>,
    /// Error to return (if any) - consumed on first use
    error: Arc<Mutex<Option<ApiError>>>,
    /// Object keys whose upload fails
    failing_keys: Arc<Mutex<HashSet<String>>>,
    /// Track number of calls for verification
    call_count: Arc<Mutex<CallCounts>>,
    /// Captured export requests
    export_requests: Arc<Mutex<Vec<ExportRequest>>>,
    /// Successfully uploaded objects
    uploads: Arc<Mutex<Vec<PutObjectRequest>>>,
}

/// Tracks API call counts for test verification
#[derive(Default, Debug, Clone)]
pub struct CallCounts {
    pub describe_stacks: usize,
    pub get_export: usize,
    pub put_object: usize,
}

impl CallCounts {
    /// Get total number of API calls made.
    pub fn total(&self) -> usize {
        self.describe_stacks + self.get_export + self.put_object
    }
}

impl MockAwsClient {
    /// Create a new mock client with default (empty) responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure stacks to return from describe_stacks.
    pub async fn with_stacks(self, stacks: Vec<StackDescription>) -> Self {
        *self.stacks.lock().await = stacks;
        self
    }

    /// Configure a single stack exposing a `ServiceEndpoint` output.
    pub async fn with_service_endpoint(self, endpoint: &str) -> Self {
        self.with_stacks(vec![StackDescription::with_outputs(vec![
            StackOutput::new(SERVICE_ENDPOINT_OUTPUT, endpoint),
        ])])
        .await
    }

    /// Configure the body returned from get_export.
    pub async fn with_export_body(self, body: impl Into<Vec<u8>>) -> Self {
        *self.export_body.lock().await = Some(body.into());
        self
    }

    /// Configure an error to return on the next API call.
    /// The error is consumed after one use.
    pub async fn with_error(self, error: ApiError) -> Self {
        *self.error.lock().await = Some(error);
        self
    }

    /// Make uploads of the given key fail.
    pub async fn with_failing_upload(self, key: &str) -> Self {
        self.failing_keys.lock().await.insert(key.to_string());
        self
    }

    /// Get the call counts for verification in tests.
    pub async fn call_counts(&self) -> CallCounts {
        self.call_count.lock().await.clone()
    }

    /// Get all captured export requests.
    pub async fn export_requests(&self) -> Vec<ExportRequest> {
        self.export_requests.lock().await.clone()
    }

    /// Get all successful uploads.
    pub async fn uploads(&self) -> Vec<PutObjectRequest> {
        self.uploads.lock().await.clone()
    }

    /// Check if there's a pending error and consume it.
    async fn check_error(&self) -> Result<()> {
        let mut error = self.error.lock().await;
        if let Some(e) = error.take() {
            return Err(e.into());
        }
        Ok(())
    }
}

#[async_trait]
impl StackApi for MockAwsClient {
    async fn describe_stacks(&self, _stack_name: &str) -> Result<Vec<StackDescription>> {
        self.call_count.lock().await.describe_stacks += 1;
        self.check_error().await?;

        Ok(self.stacks.lock().await.clone())
    }
}

#[async_trait]
impl ExportApi for MockAwsClient {
    async fn get_export(&self, request: &ExportRequest) -> Result<Option<Vec<u8>>> {
        self.call_count.lock().await.get_export += 1;
        self.export_requests.lock().await.push(request.clone());
        self.check_error().await?;

        Ok(self.export_body.lock().await.clone())
    }
}

#[async_trait]
impl ObjectStoreApi for MockAwsClient {
    async fn put_object(&self, request: PutObjectRequest) -> Result<()> {
        self.call_count.lock().await.put_object += 1;
        self.check_error().await?;

        if self.failing_keys.lock().await.contains(&request.key) {
            return Err(ApiError::Service {
                service: "S3",
                message: "AccessDenied".to_string(),
            }
            .into());
        }

        self.uploads.lock().await.push(request);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_error_consumed_once() {
        let mock = MockAwsClient::new()
            .with_error(ApiError::Service {
                service: "CloudFormation",
                message: "throttled".to_string(),
            })
            .await;

        assert!(mock.describe_stacks("s").await.is_err());
        assert!(mock.describe_stacks("s").await.is_ok());
        assert_eq!(mock.call_counts().await.total(), 2);
    }

    #[tokio::test]
    async fn test_mock_failing_upload() {
        let mock = MockAwsClient::new().with_failing_upload("a.js").await;

        let request = |key: &str| PutObjectRequest {
            bucket: "b".to_string(),
            key: key.to_string(),
            body: Vec::new(),
            content_type: None,
        };

        assert!(mock.put_object(request("a.js")).await.is_err());
        assert!(mock.put_object(request("b.js")).await.is_ok());
        assert_eq!(mock.uploads().await.len(), 1);
    }
}
