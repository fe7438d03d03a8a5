//! Drive Server: folder and file browser backed by PostgreSQL
//!
//! Main entry point that loads configuration, sets up logging, opens the
//! stores, and starts the HTTP server.

use tracing_subscriber::{EnvFilter, fmt};

use drive_core::config::AppConfig;
use drive_core::error::AppError;
use drive_database::StoreManager;

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!(error = %e, "Server error");
        std::process::exit(1);
    }
}

/// Load configuration from files and environment
fn load_configuration() -> Result<AppConfig, AppError> {
    let dir = std::env::var("DRIVE_CONFIG_DIR").unwrap_or_else(|_| "config".to_string());
    let env = std::env::var("DRIVE_ENV").unwrap_or_else(|_| "development".to_string());
    AppConfig::load_from(&dir, &env)
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt().pretty().with_env_filter(filter).with_target(true).init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        provider = ?config.database.provider,
        database = %drive_database::connection::redact_url(&config.database.url),
        "Starting Drive"
    );

    let stores = StoreManager::connect(&config.database).await?;
    drive_api::run_server(config, stores).await
}
