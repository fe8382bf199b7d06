//! gsdb CLI - Main entry point

use clap::Parser;
use gsdb_cli::{Cli, Commands};
use gsdb_common::logging::{init_logging, LogConfig, LogLevel, LogOutput};
use std::process;
use tracing::error;

#[tokio::main]
async fn main() {
    // Pick up GSDB_* settings from a local .env, if present
    dotenvy::dotenv().ok();

    // Parse command-line arguments
    let cli = Cli::parse();

    // Initialize logging based on verbose flag and environment
    let log_config = if cli.verbose {
        // Verbose mode: log to console with debug level
        LogConfig::builder()
            .level(LogLevel::Debug)
            .output(LogOutput::Console)
            .log_file_prefix("gsdb-cli".to_string())
            .build()
    } else {
        // Normal mode: only warnings and errors to console
        LogConfig::builder()
            .level(LogLevel::Warn)
            .output(LogOutput::Console)
            .log_file_prefix("gsdb-cli".to_string())
            .build()
    };

    // Merge with environment variables (they take precedence)
    let log_config = LogConfig::from_env().unwrap_or(log_config);

    // Initialize logging (ignore errors as CLI should work without logging)
    let _ = init_logging(&log_config);

    // Execute command
    let result = execute_command(&cli).await;

    // Handle result
    if let Err(e) = result {
        error!(error = %e, "Command failed");
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

/// Execute the CLI command
async fn execute_command(cli: &Cli) -> gsdb_cli::Result<()> {
    match &cli.command {
        Commands::Populate {
            path,
            url,
            delete_first,
        } => {
            gsdb_cli::commands::populate::run(
                cli.connection.clone(),
                path.clone(),
                url.clone(),
                *delete_first,
            )
            .await
        }

        Commands::Drop { yes } => gsdb_cli::commands::drop::run(cli.connection.clone(), *yes).await,

        Commands::Export { output } => {
            gsdb_cli::commands::export::run(cli.connection.clone(), output.clone()).await
        }
    }
}
