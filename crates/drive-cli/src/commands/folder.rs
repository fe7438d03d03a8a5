//! Folder inspection CLI commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use drive_core::config::AppConfig;
use drive_core::error::AppError;
use drive_entity::{Folder, FolderId};
use drive_service::DriveQueries;

use crate::output::{self, OutputFormat};

/// Arguments for folder commands
#[derive(Debug, Args)]
pub struct FolderArgs {
    /// Folder subcommand
    #[command(subcommand)]
    pub command: FolderCommand,
}

/// Folder subcommands
#[derive(Debug, Subcommand)]
pub enum FolderCommand {
    /// List the child folders and files of a folder
    Ls {
        /// Folder ID
        id: FolderId,
    },
    /// Show every folder below a folder
    Tree {
        /// Folder ID
        id: FolderId,
    },
    /// Show the ancestor chain of a folder
    Parents {
        /// Folder ID
        id: FolderId,
    },
    /// Show the root folder of a user
    Root {
        /// User ID
        #[arg(short, long)]
        user: String,
    },
}

/// Folder or file display row
#[derive(Debug, Serialize, Tabled)]
struct EntryRow {
    /// ID
    id: i64,
    /// Kind
    kind: &'static str,
    /// Name
    name: String,
    /// Parent
    parent: String,
    /// Owner
    owner: String,
    /// Size in bytes
    size: String,
}

impl From<&Folder> for EntryRow {
    fn from(f: &Folder) -> Self {
        Self {
            id: f.id,
            kind: "folder",
            name: f.name.clone(),
            parent: f.parent.map(|p| p.to_string()).unwrap_or_else(|| "-".to_string()),
            owner: f.owner_id.clone(),
            size: "-".to_string(),
        }
    }
}

/// Execute folder commands
pub async fn execute(
    args: &FolderArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let stores = super::connect_stores(config).await?;
    let queries = DriveQueries::new(stores.folders(), stores.files());

    let rows: Vec<EntryRow> = match &args.command {
        FolderCommand::Ls { id } => {
            let folders = queries.list_child_folders(*id).await?;
            let files = queries.list_child_files(*id).await?;
            folders
                .iter()
                .map(EntryRow::from)
                .chain(files.into_iter().map(|f| EntryRow {
                    id: f.id,
                    kind: "file",
                    name: f.name,
                    parent: f.parent.to_string(),
                    owner: f.owner_id,
                    size: f.size.to_string(),
                }))
                .collect()
        }
        FolderCommand::Tree { id } => {
            let contents = queries.collect_subtree(*id).await?;
            contents.folders.iter().map(EntryRow::from).collect()
        }
        FolderCommand::Parents { id } => queries
            .resolve_ancestor_chain(*id)
            .await?
            .iter()
            .map(EntryRow::from)
            .collect(),
        FolderCommand::Root { user } => queries
            .get_root_folder_for_user(user)
            .await?
            .iter()
            .map(EntryRow::from)
            .collect(),
    };

    stores.close().await;
    output::print_list(&rows, format);
    Ok(())
}
