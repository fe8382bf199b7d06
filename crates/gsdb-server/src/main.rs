//! gsdb Server - Main entry point

use anyhow::Result;
use gsdb_common::logging::{init_logging, LogConfig};
use gsdb_server::config::ServerConfig;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging with configuration from environment
    let log_config = LogConfig::builder()
        .log_file_prefix("gsdb-server".to_string())
        .filter_directives("gsdb_server=debug,tower_http=debug,axum=trace".to_string())
        .build();

    // Merge with environment variables (they take precedence)
    let log_config = LogConfig::from_env().unwrap_or(log_config);

    init_logging(&log_config)?;

    info!("Starting gsdb server");

    // Load configuration
    let config = ServerConfig::load()?;
    info!(
        "Configuration loaded - server will bind to {}:{}",
        config.host, config.port
    );

    gsdb_server::api::serve(config).await?;

    info!("Server shut down gracefully");

    Ok(())
}
