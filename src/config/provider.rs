//! AWS provider settings captured once per run
//!
//! Precedence: CLI flag > environment variable > descriptor > default.
//! Flags and environment are merged by clap before reaching this module.

use serde::Serialize;

use super::DeploymentDescriptor;
use crate::error::{ConfigError, Result};

/// Stage used when neither the CLI nor the descriptor names one
pub const DEFAULT_STAGE: &str = "dev";

/// Region used when neither the CLI nor the descriptor names one
pub const DEFAULT_REGION: &str = "us-east-1";

/// Values supplied on the command line (or via environment)
#[derive(Debug, Clone, Default)]
pub struct ProviderOverrides {
    pub stage: Option<String>,
    pub region: Option<String>,
    pub stack_name: Option<String>,
    pub profile: Option<String>,
    pub endpoint_url: Option<String>,
}

/// Immutable provider settings passed into every remote operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProviderSettings {
    pub stack_name: String,
    pub region: String,
    pub stage: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,
    /// Custom AWS endpoint for local testing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint_url: Option<String>,
}

impl ProviderSettings {
    /// Resolve provider settings from the descriptor and overrides.
    pub fn resolve(descriptor: &DeploymentDescriptor, overrides: &ProviderOverrides) -> Result<Self> {
        let provider = &descriptor.provider;

        let stage = overrides
            .stage
            .clone()
            .or_else(|| provider.stage.clone())
            .unwrap_or_else(|| DEFAULT_STAGE.to_string());

        let region = overrides
            .region
            .clone()
            .or_else(|| provider.region.clone())
            .unwrap_or_else(|| DEFAULT_REGION.to_string());

        let stack_name = match overrides
            .stack_name
            .clone()
            .or_else(|| provider.stack_name.clone())
        {
            Some(name) => name,
            None => {
                let service = descriptor
                    .service
                    .as_ref()
                    .ok_or(ConfigError::MissingStackName)?;
                format!("{}-{}", service.as_str(), stage)
            }
        };

        Ok(Self {
            stack_name,
            region,
            stage,
            profile: overrides.profile.clone().or_else(|| provider.profile.clone()),
            endpoint_url: overrides.endpoint_url.clone(),
        })
    }
}
