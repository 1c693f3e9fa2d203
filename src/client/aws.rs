//! AWS SDK implementation of the API traits

use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region, SdkConfig};
use aws_sdk_cloudformation::error::ProvideErrorMetadata;
use aws_sdk_s3::primitives::ByteStream;
use log::debug;

use super::api::{ExportApi, ObjectStoreApi, StackApi};
use super::models::{ExportRequest, PutObjectRequest, StackDescription, StackOutput};
use crate::config::{Choice, ProviderSettings};
use crate::error::{ApiError, Result};

/// Clients for the three AWS services a build talks to
#[derive(Debug, Clone)]
pub struct AwsClient {
    cloudformation: aws_sdk_cloudformation::Client,
    apigateway: aws_sdk_apigateway::Client,
    s3: aws_sdk_s3::Client,
}

impl AwsClient {
    /// Load shared AWS configuration for the provider and build the clients.
    ///
    /// Credentials come from the default chain, or the named profile if set.
    pub async fn new(provider: &ProviderSettings) -> Self {
        let mut loader = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(provider.region.clone()));

        if let Some(profile) = &provider.profile {
            loader = loader.profile_name(profile);
        }
        if let Some(endpoint) = &provider.endpoint_url {
            debug!("Using custom AWS endpoint {}", endpoint);
            loader = loader.endpoint_url(endpoint);
        }

        Self::from_conf(&loader.load().await)
    }

    /// Build the clients from an already loaded configuration
    pub fn from_conf(shared: &SdkConfig) -> Self {
        // Custom endpoints (localstack, test servers) do not resolve virtual-hosted buckets
        let s3_config = aws_sdk_s3::config::Builder::from(shared)
            .force_path_style(shared.endpoint_url().is_some())
            .build();

        Self {
            cloudformation: aws_sdk_cloudformation::Client::new(shared),
            apigateway: aws_sdk_apigateway::Client::new(shared),
            s3: aws_sdk_s3::Client::from_conf(s3_config),
        }
    }
}

#[async_trait]
impl StackApi for AwsClient {
    async fn describe_stacks(&self, stack_name: &str) -> Result<Vec<StackDescription>> {
        let response = self
            .cloudformation
            .describe_stacks()
            .stack_name(stack_name)
            .send()
            .await;

        let output = match response {
            Ok(output) => output,
            Err(err) => {
                // CloudFormation reports an unknown stack as a validation error
                let missing = err.as_service_error().is_some_and(|e| {
                    e.code() == Some("ValidationError")
                        && e.message().is_some_and(|m| m.contains("does not exist"))
                });
                if missing {
                    debug!("Stack {} does not exist", stack_name);
                    return Ok(Vec::new());
                }
                return Err(ApiError::service("CloudFormation", err).into());
            }
        };

        let stacks = output
            .stacks()
            .iter()
            .map(|stack| StackDescription {
                outputs: stack.outputs.as_ref().map(|outputs| {
                    outputs
                        .iter()
                        .map(|output| StackOutput {
                            output_key: output.output_key().map(str::to_string),
                            output_value: output.output_value().map(str::to_string),
                        })
                        .collect()
                }),
            })
            .collect();

        Ok(stacks)
    }
}

#[async_trait]
impl ExportApi for AwsClient {
    async fn get_export(&self, request: &ExportRequest) -> Result<Option<Vec<u8>>> {
        let output = self
            .apigateway
            .get_export()
            .rest_api_id(&request.rest_api_id)
            .stage_name(&request.stage_name)
            .export_type(request.export_type.as_str())
            .accepts(request.accepts.as_str())
            .parameters("extensions", request.extensions.as_str())
            .send()
            .await
            .map_err(|e| ApiError::service("API Gateway", e))?;

        Ok(output.body.map(|blob| blob.into_inner()))
    }
}

#[async_trait]
impl ObjectStoreApi for AwsClient {
    async fn put_object(&self, request: PutObjectRequest) -> Result<()> {
        debug!(
            "PUT s3://{}/{} ({} bytes)",
            request.bucket,
            request.key,
            request.body.len()
        );

        self.s3
            .put_object()
            .bucket(request.bucket)
            .key(request.key)
            .set_content_type(request.content_type.map(str::to_string))
            .body(ByteStream::from(request.body))
            .send()
            .await
            .map_err(|e| ApiError::service("S3", e))?;

        Ok(())
    }
}
