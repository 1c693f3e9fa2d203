//! Command execution context
//!
//! Loads the deployment descriptor once and resolves everything a command
//! needs from it: plugin settings, provider settings and on-disk paths.

use std::path::PathBuf;

use log::debug;

use crate::cli::OutputFormat;
use crate::cli::args::GlobalOptions;
use crate::client::AwsClient;
use crate::config::{DeploymentDescriptor, ProviderSettings, SwaggerUiSettings};
use crate::error::Result;

/// Context for command execution containing resolved configuration and paths.
#[derive(Debug, Clone)]
pub struct CommandContext {
    /// Resolved plugin settings
    pub settings: SwaggerUiSettings,
    /// Resolved provider settings
    pub provider: ProviderSettings,
    /// Bundle output directory
    pub output_dir: PathBuf,
    /// Swagger UI distribution directory
    pub dist: PathBuf,
    /// Descriptor the settings were read from
    pub descriptor_path: PathBuf,
    /// Output format preference
    pub format: OutputFormat,
}

impl CommandContext {
    /// Load the descriptor and resolve all settings.
    ///
    /// # Errors
    /// Returns error if the descriptor cannot be read or parsed, or the stack
    /// name cannot be determined.
    pub fn new(opts: &GlobalOptions) -> Result<Self> {
        let descriptor_path = opts.descriptor_path();
        debug!("Loading deployment descriptor {}", descriptor_path.display());

        let descriptor = DeploymentDescriptor::load_from(&descriptor_path)?;
        Self::from_descriptor(opts, &descriptor, descriptor_path)
    }

    /// Resolve the context from an already parsed descriptor.
    pub fn from_descriptor(
        opts: &GlobalOptions,
        descriptor: &DeploymentDescriptor,
        descriptor_path: PathBuf,
    ) -> Result<Self> {
        let settings = descriptor.swagger_ui_settings();
        let provider = ProviderSettings::resolve(descriptor, &opts.provider)?;
        let output_dir = opts.service_path.join(&settings.directory_name);

        Ok(Self {
            settings,
            provider,
            output_dir,
            dist: opts.dist_path(),
            descriptor_path,
            format: opts.format,
        })
    }

    /// Build AWS clients for the resolved provider.
    pub async fn aws_client(&self) -> AwsClient {
        AwsClient::new(&self.provider).await
    }
}
