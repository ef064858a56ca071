//! almacen-cli: warehouse order dispatch against the delivery platform

use anyhow::Result;
use clap::Parser;

use almacen_cli::cli::{self, Cli, Commands, RoutingCommands};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let args = Cli::parse();

    let default_filter = match args.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let config_path = args.config.as_deref();
    match args.command {
        Commands::Upload(upload_args) => {
            cli::commands::upload::handle_upload(upload_args, config_path).await
        }
        Commands::Routing(RoutingCommands::Build(build_args)) => {
            cli::commands::routing::handle_routing_build(build_args)
        }
        Commands::Config(config_command) => {
            cli::commands::config::handle_config(config_command, config_path)
        }
    }
}
