//! Issue access tokens for testing and scripting.

use clap::{Args, Subcommand};

use drive_auth::JwtEncoder;
use drive_core::config::AppConfig;
use drive_core::error::AppError;

use crate::output::{self, OutputFormat};

/// Arguments for token commands
#[derive(Debug, Args)]
pub struct TokenArgs {
    /// Token subcommand
    #[command(subcommand)]
    pub command: TokenCommand,
}

/// Token subcommands
#[derive(Debug, Subcommand)]
pub enum TokenCommand {
    /// Issue an access token for a user
    Issue {
        /// User ID placed in the `sub` claim
        #[arg(short, long)]
        user: String,
    },
}

/// Execute token commands
pub fn execute(args: &TokenArgs, config: &AppConfig, format: OutputFormat) -> Result<(), AppError> {
    match &args.command {
        TokenCommand::Issue { user } => {
            let token = JwtEncoder::new(&config.auth).issue(user)?;
            match format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&token)?),
                OutputFormat::Table => {
                    output::print_kv("Token", &token.token);
                    output::print_kv("Expires at", &token.expires_at.to_rfc3339());
                }
            }
        }
    }
    Ok(())
}
