//! helix-runner CLI entry point.

use clap::Parser;

use helix_runner::cli::{Cli, Commands};
use helix_runner::infrastructure::config::ConfigLoader;
use helix_runner::infrastructure::logging::{LogConfig, LoggerImpl};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match ConfigLoader::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(err) => helix_runner::cli::handle_error(err, cli.json),
    };

    let _logger = match LoggerImpl::init(&LogConfig::from(&config.logging)) {
        Ok(logger) => logger,
        Err(err) => helix_runner::cli::handle_error(err, cli.json),
    };

    let result = match cli.command {
        Commands::GetSecret(args) => {
            helix_runner::cli::commands::get_secret::execute(args, &config, cli.json).await
        }
        Commands::Run(args) => helix_runner::cli::commands::run::execute(args, &config, cli.json).await,
        Commands::Inspect(args) => {
            helix_runner::cli::commands::inspect::execute(args, &config, cli.json).await
        }
    };

    if let Err(err) = result {
        helix_runner::cli::handle_error(err, cli.json);
    }
}
