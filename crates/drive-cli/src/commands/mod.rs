//! CLI command definitions and dispatch.

pub mod folder;
pub mod migrate;
pub mod onboard;
pub mod serve;
pub mod token;

use clap::{Parser, Subcommand};

use drive_core::config::{AppConfig, DatabaseProvider};
use drive_core::error::AppError;
use drive_database::StoreManager;

use crate::output::OutputFormat;

/// Drive: folder and file browser administration
#[derive(Debug, Parser)]
#[command(name = "drive", version, about, long_about = None)]
pub struct Cli {
    /// Directory holding default.toml and the environment overlays
    #[arg(short, long, default_value = "config")]
    pub config: String,

    /// Environment overlay to load (config/{env}.toml)
    #[arg(short, long, env = "DRIVE_ENV", default_value = "development")]
    pub env: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start the Drive server
    Serve(serve::ServeArgs),
    /// Database migration management
    Migrate(migrate::MigrateArgs),
    /// Create the initial folder tree for a user
    Onboard(onboard::OnboardArgs),
    /// Folder inspection
    Folder(folder::FolderArgs),
    /// Access token management
    Token(token::TokenArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> Result<(), AppError> {
        let config = self.load_config()?;
        match &self.command {
            Commands::Serve(args) => serve::execute(args, config).await,
            Commands::Migrate(args) => migrate::execute(args, &config).await,
            Commands::Onboard(args) => onboard::execute(args, &config).await,
            Commands::Folder(args) => folder::execute(args, &config, self.format).await,
            Commands::Token(args) => token::execute(args, &config, self.format),
        }
    }

    fn load_config(&self) -> Result<AppConfig, AppError> {
        AppConfig::load_from(&self.config, &self.env)
    }
}

/// Helper: open the configured stores for a one-shot command.
///
/// The memory provider is refused: its data would vanish when the command exits.
pub async fn connect_stores(config: &AppConfig) -> Result<StoreManager, AppError> {
    if config.database.provider == DatabaseProvider::Memory {
        return Err(AppError::configuration(
            "This command needs the postgres provider; the memory store does not outlive the process",
        ));
    }
    StoreManager::connect(&config.database).await
}
