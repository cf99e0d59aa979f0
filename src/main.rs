//! Task credentials endpoint entry point.

use clap::Parser;

use task_credentials::cli::{Cli, Commands};
use task_credentials::infrastructure::config::ConfigLoader;
use task_credentials::infrastructure::logging::LoggerImpl;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match ConfigLoader::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(err) => task_credentials::cli::handle_error(err, cli.json),
    };

    let result = match cli.command {
        Commands::Config => task_credentials::cli::commands::config::execute(&config, cli.json),
        Commands::Serve(args) => match LoggerImpl::init(&config.logging) {
            Ok(_logger) => task_credentials::cli::commands::serve::execute(args, config).await,
            Err(err) => Err(err),
        },
    };

    if let Err(err) = result {
        task_credentials::cli::handle_error(err, cli.json);
    }
}
