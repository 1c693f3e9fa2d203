//! Global CLI options shared across all commands
//!
//! This module provides a centralized struct for global CLI options so command
//! handlers take one parameter instead of a dozen.

use std::path::{Path, PathBuf};

use crate::cli::{Cli, OutputFormat};
use crate::config::{DEFAULT_DESCRIPTOR, ProviderOverrides};

/// Location of the Swagger UI distribution inside a service, by default
const DEFAULT_DIST: &str = "node_modules/swagger-ui-dist";

/// Global CLI options passed to all command handlers.
///
/// # Precedence
///
/// For provider options, the precedence is: CLI flag > environment variable >
/// descriptor > default. This struct captures the CLI/env layer; descriptor
/// values are applied later in `CommandContext`.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Output format (pretty, table, json)
    pub format: OutputFormat,

    /// Service root; relative paths resolve against it
    pub service_path: PathBuf,

    /// Deployment descriptor path override
    pub config: Option<PathBuf>,

    /// Swagger UI distribution directory override
    pub swagger_ui_dist: Option<PathBuf>,

    /// Stage, region, stack name, profile and endpoint overrides
    pub provider: ProviderOverrides,
}

impl GlobalOptions {
    /// Create GlobalOptions from a parsed CLI struct.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            format: cli.format,
            service_path: cli
                .service_path
                .clone()
                .unwrap_or_else(|| PathBuf::from(".")),
            config: cli.config.clone(),
            swagger_ui_dist: cli.swagger_ui_dist.clone(),
            provider: ProviderOverrides {
                stage: cli.stage.clone(),
                region: cli.region.clone(),
                stack_name: cli.stack_name.clone(),
                profile: cli.profile.clone(),
                endpoint_url: cli.endpoint_url.clone(),
            },
        }
    }

    /// Deployment descriptor path, relative to the service path unless absolute.
    pub fn descriptor_path(&self) -> PathBuf {
        match &self.config {
            Some(path) => self.resolve(path),
            None => self.service_path.join(DEFAULT_DESCRIPTOR),
        }
    }

    /// Swagger UI distribution directory.
    pub fn dist_path(&self) -> PathBuf {
        match &self.swagger_ui_dist {
            Some(path) => self.resolve(path),
            None => self.service_path.join(DEFAULT_DIST),
        }
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.service_path.join(path)
        }
    }
}
