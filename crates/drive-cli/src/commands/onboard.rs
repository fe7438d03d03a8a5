//! Onboard a user from the command line.

use clap::Args;

use drive_core::config::AppConfig;
use drive_core::error::AppError;
use drive_database::{FolderStore, StoreManager};
use drive_entity::FolderId;
use drive_service::DriveMutations;

use crate::output;

/// Arguments for the onboard command
#[derive(Debug, Args)]
pub struct OnboardArgs {
    /// User ID in the identity system
    #[arg(short, long)]
    pub user: String,

    /// Create another tree even if the user already has a root
    #[arg(long)]
    pub force: bool,
}

/// Execute the onboard command
pub async fn execute(args: &OnboardArgs, config: &AppConfig) -> Result<(), AppError> {
    let stores = super::connect_stores(config).await?;
    let result = onboard(&stores, &args.user, args.force).await;
    stores.close().await;

    let root_id = result?;
    output::print_success(&format!("Onboarded user '{}'", args.user));
    output::print_kv("Root folder", &root_id.to_string());
    Ok(())
}

/// Create the default tree for `user`, refusing when any root already exists
/// unless `force` is set.
pub async fn onboard(stores: &StoreManager, user: &str, force: bool) -> Result<FolderId, AppError> {
    if !force {
        let roots = stores.folders().find_roots_for_owner(user).await?;
        if !roots.is_empty() {
            let ids: Vec<String> = roots.iter().map(|r| r.id.to_string()).collect();
            return Err(AppError::conflict(format!(
                "User '{}' already has root folder(s) {} (use --force to create another)",
                user,
                ids.join(", ")
            )));
        }
    }

    DriveMutations::new(stores.folders(), stores.files())
        .onboard_user(user)
        .await
}
