//! User Service - command-line account management.

use std::process::ExitCode;

use clap::Parser;

use user_service_lib::cli::{self, Cli, Commands};
use user_service_lib::config::UserServiceConfig;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Loads .env before anything reads the environment
    let config = UserServiceConfig::from_env();
    common::init_tracing(&config.log, cli.verbose);

    match cli.command {
        Commands::Account(command) => {
            let service = match user_service_lib::connect_service(&config).await {
                Ok(service) => service,
                Err(e) => {
                    tracing::error!(error = %e, "Failed to open user store");
                    eprintln!("{}", cli::render_error(domain::DomainError::Internal, cli.json));
                    return ExitCode::FAILURE;
                }
            };

            match cli::execute(&service, &command).await {
                Ok(outcome) => {
                    println!("{}", cli::render_outcome(&outcome, cli.json));
                    ExitCode::SUCCESS
                }
                Err(error) => {
                    eprintln!("{}", cli::render_error(error, cli.json));
                    ExitCode::FAILURE
                }
            }
        }
        Commands::Migrate { action } => {
            match user_service_lib::run_migrations(&config, action.into()).await {
                Ok(()) => ExitCode::SUCCESS,
                Err(e) => {
                    tracing::error!(error = %e, "Migration failed");
                    eprintln!("Migration failed: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
    }
}
