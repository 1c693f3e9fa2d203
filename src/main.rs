//! swagger-ui-export - export API Gateway documentation as a Swagger UI site

use clap::{CommandFactory, Parser};

mod bundle;
mod cli;
mod client;
mod config;
mod error;
mod export;
mod models;
mod output;
mod publish;

use cli::{Cli, Commands, GlobalOptions};
use error::Result;

/// Log target of the progress lines shown during a build
pub const LOG_TARGET: &str = "Serverless SwaggerUI";

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.debug);

    if let Err(err) = run(cli).await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

fn init_logging(debug: bool) {
    let default_filter = if debug { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

async fn run(cli: Cli) -> Result<()> {
    let opts = GlobalOptions::from_cli(&cli);

    match cli.command {
        Commands::SwaggerUi => cli::swagger_ui::run(&opts).await,
        Commands::Hook { event } => cli::hook::run(&opts, &event).await,
        Commands::Config => cli::config::run(&opts),
        Commands::Version => {
            println!("swagger-ui-export version {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Commands::Completion { shell } => {
            clap_complete::generate(
                shell,
                &mut Cli::command(),
                "swagger-ui-export",
                &mut std::io::stdout(),
            );
            Ok(())
        }
    }
}
