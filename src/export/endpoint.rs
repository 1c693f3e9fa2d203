//! Stack endpoint resolution
//!
//! The API id is the leading hostname label of the stack's `ServiceEndpoint`
//! output, e.g. `abc123` in `https://abc123.execute-api.us-east-1.amazonaws.com/dev`.

use log::{debug, info};

use crate::LOG_TARGET;
use crate::client::StackApi;
use crate::client::models::SERVICE_ENDPOINT_OUTPUT;
use crate::error::{Result, StackError};

/// Look up the stack and extract the API Gateway id from its endpoint output.
pub async fn resolve_api_gateway_id(api: &dyn StackApi, stack_name: &str) -> Result<String> {
    info!(target: LOG_TARGET, "Resolving API Gateway ID...");

    let stacks = api.describe_stacks(stack_name).await?;
    let stack = stacks.first().ok_or_else(|| StackError::NotFound {
        stack: stack_name.to_string(),
    })?;

    if stack.outputs.is_none() {
        return Err(StackError::MissingOutputs {
            stack: stack_name.to_string(),
        }
        .into());
    }

    let output = stack
        .output(SERVICE_ENDPOINT_OUTPUT)
        .ok_or_else(|| StackError::MissingOutput {
            stack: stack_name.to_string(),
            key: SERVICE_ENDPOINT_OUTPUT.to_string(),
        })?;

    let endpoint = output
        .output_value
        .as_deref()
        .filter(|value| !value.is_empty())
        .ok_or_else(|| StackError::MissingOutputValue {
            stack: stack_name.to_string(),
            key: SERVICE_ENDPOINT_OUTPUT.to_string(),
        })?;

    let api_id = parse_api_id(endpoint).ok_or_else(|| StackError::MalformedEndpoint {
        stack: stack_name.to_string(),
        key: SERVICE_ENDPOINT_OUTPUT.to_string(),
        value: endpoint.to_string(),
    })?;

    debug!("Resolved API id {} from {}", api_id, endpoint);
    Ok(api_id.to_string())
}

/// Extract the API id: text before the first `.`, after the scheme's `//`.
pub fn parse_api_id(endpoint: &str) -> Option<&str> {
    let head = endpoint.split('.').next()?;
    head.split("//").nth(1).filter(|id| !id.is_empty())
}
