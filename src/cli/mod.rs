//! CLI command definitions and handlers

use std::path::PathBuf;

use clap::{Parser, Subcommand};
pub use clap_complete::Shell;

pub mod args;
pub mod config;
pub mod context;
pub mod hook;
pub mod swagger_ui;

pub use args::{GlobalOptions, OutputFormat};
pub use context::CommandContext;

/// Export API Gateway documentation and bundle it with Swagger UI
#[derive(Parser, Debug)]
#[command(name = "swagger-ui-export")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (pretty, table, json)
    #[arg(
        long,
        global = true,
        env = "SWAGGER_UI_EXPORT_FORMAT",
        default_value = "pretty",
        hide_env = true,
        hide_possible_values = true
    )]
    pub format: OutputFormat,

    /// Service root directory (defaults to the current directory)
    #[arg(long, global = true, env = "SWAGGER_UI_EXPORT_SERVICE_PATH", hide_env = true)]
    pub service_path: Option<PathBuf>,

    /// Deployment descriptor (defaults to serverless.yml in the service root)
    #[arg(long, global = true, env = "SWAGGER_UI_EXPORT_CONFIG", hide_env = true)]
    pub config: Option<PathBuf>,

    /// Swagger UI distribution directory (defaults to node_modules/swagger-ui-dist)
    #[arg(long, global = true, env = "SWAGGER_UI_DIST", hide_env = true)]
    pub swagger_ui_dist: Option<PathBuf>,

    /// Deployment stage
    #[arg(long, short = 's', global = true, env = "SWAGGER_UI_EXPORT_STAGE", hide_env = true)]
    pub stage: Option<String>,

    /// AWS region
    #[arg(long, short = 'r', global = true, env = "AWS_REGION", hide_env = true)]
    pub region: Option<String>,

    /// CloudFormation stack name (defaults to <service>-<stage>)
    #[arg(long, global = true)]
    pub stack_name: Option<String>,

    /// AWS credentials profile
    #[arg(long, global = true, env = "AWS_PROFILE", hide_env = true)]
    pub profile: Option<String>,

    /// Custom AWS endpoint URL (e.g. localstack)
    #[arg(long, global = true, env = "AWS_ENDPOINT_URL", hide_env = true)]
    pub endpoint_url: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true, env = "SWAGGER_UI_EXPORT_DEBUG", hide_env = true)]
    pub debug: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build the Swagger UI static site (and upload it when s3Bucket is set)
    #[command(name = "swagger-ui", visible_alias = "swaggerUi")]
    SwaggerUi,

    /// Run the lifecycle hook registered for a deployment event
    #[command(after_help = "\
Registered events:
  after:deploy:deploy   build the site after a deployment
  swaggerUi:swaggerUi   build the site on explicit request

Other events are accepted and ignored.")]
    Hook {
        /// Lifecycle event name
        event: String,
    },

    /// Show the resolved configuration
    Config,

    /// Display version information
    Version,

    /// Generate shell completions
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
