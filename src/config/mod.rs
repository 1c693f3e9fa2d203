//! Deployment descriptor loading and configuration resolution

use serde::Deserialize;
use serde_yaml::Value;
use std::path::Path;

use crate::error::{ConfigError, Result};

pub mod provider;
pub mod settings;

pub use provider::{ProviderOverrides, ProviderSettings};
pub use settings::{Accepts, Choice, ExportType, Extensions, RawSwaggerUiConfig, SwaggerUiSettings};

/// Default descriptor file name, relative to the service path
pub const DEFAULT_DESCRIPTOR: &str = "serverless.yml";

/// The parts of a `serverless.yml` deployment descriptor this tool reads
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DeploymentDescriptor {
    /// Service name, either `service: name` or `service: { name: name }`
    #[serde(default)]
    pub service: Option<ServiceName>,

    /// Provider section (stage, region, stack naming)
    #[serde(default)]
    pub provider: ProviderSection,

    /// Custom extension namespace
    #[serde(default)]
    pub custom: CustomSection,
}

/// Service name in either of its two descriptor shapes
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ServiceName {
    Plain(String),
    Named { name: String },
}

impl ServiceName {
    pub fn as_str(&self) -> &str {
        match self {
            ServiceName::Plain(name) => name,
            ServiceName::Named { name } => name,
        }
    }
}

/// `provider:` section of the descriptor
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProviderSection {
    #[serde(default)]
    pub stage: Option<String>,

    #[serde(default)]
    pub region: Option<String>,

    /// Explicit CloudFormation stack name
    #[serde(default, rename = "stackName")]
    pub stack_name: Option<String>,

    /// Named AWS credentials profile
    #[serde(default)]
    pub profile: Option<String>,
}

/// `custom:` section of the descriptor
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CustomSection {
    /// Kept untyped so malformed plugin settings fall back to defaults
    #[serde(default, rename = "swaggerUi")]
    pub swagger_ui: Option<Value>,
}

impl DeploymentDescriptor {
    /// Load the descriptor from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()).into());
        }

        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse descriptor YAML
    pub fn parse(contents: &str) -> Result<Self> {
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }

        let descriptor: DeploymentDescriptor =
            serde_yaml::from_str(contents).map_err(ConfigError::from)?;

        Ok(descriptor)
    }

    /// Raw plugin settings from `custom.swaggerUi`
    pub fn raw_swagger_ui(&self) -> RawSwaggerUiConfig {
        RawSwaggerUiConfig::from_value(self.custom.swagger_ui.as_ref())
    }

    /// Resolved plugin settings with every default applied
    pub fn swagger_ui_settings(&self) -> SwaggerUiSettings {
        SwaggerUiSettings::resolve(&self.raw_swagger_ui())
    }
}
