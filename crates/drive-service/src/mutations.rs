//! Folder/file creation and user onboarding.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;

use drive_core::error::AppError;
use drive_core::result::AppResult;
use drive_database::store::{FileStore, FolderStore};
use drive_entity::{DEFAULT_CHILD_FOLDERS, File, Folder, FolderId, NewFile, NewFolder};

use crate::context::RequestContext;

/// Name given to a folder created without an explicit name.
pub const DEFAULT_FOLDER_NAME: &str = "New Folder";

/// Request to create a new folder.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateFolderRequest {
    /// Folder name.
    pub name: String,
    /// Parent folder ID.
    pub parent: FolderId,
}

/// Metadata of an uploaded file, as reported by the upload provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewFileRequest {
    /// File name.
    pub name: String,
    /// Size in bytes.
    pub size: i64,
    /// External storage location.
    pub url: String,
    /// Storage-provider key.
    #[serde(rename = "UTkey")]
    pub ut_key: String,
    /// Target folder ID.
    pub parent: FolderId,
}

/// Write-side operations on the folder tree.
///
/// Parents are not checked for existence or ownership on insert.
#[derive(Debug, Clone)]
pub struct DriveMutations {
    /// Folder store.
    folders: Arc<dyn FolderStore>,
    /// File store.
    files: Arc<dyn FileStore>,
}

impl DriveMutations {
    /// Creates a new mutation service.
    pub fn new(folders: Arc<dyn FolderStore>, files: Arc<dyn FileStore>) -> Self {
        Self { folders, files }
    }

    /// Records an uploaded file owned by `user_id`.
    pub async fn create_file(&self, req: NewFileRequest, user_id: &str) -> AppResult<File> {
        let data = NewFile {
            name: req.name,
            size: req.size,
            url: req.url,
            ut_key: req.ut_key,
            parent: req.parent,
            owner_id: user_id.to_string(),
        };

        let file = self.files.create(&data).await?;

        info!(
            file_id = file.id,
            parent = file.parent,
            user_id = %user_id,
            "File created"
        );

        Ok(file)
    }

    /// Creates a folder owned by the acting user.
    ///
    /// Fails with `Unauthorized` before touching the store when there is no
    /// identity.
    pub async fn create_folder(
        &self,
        identity: Option<&RequestContext>,
        req: CreateFolderRequest,
    ) -> AppResult<Folder> {
        let ctx = identity.ok_or_else(|| AppError::unauthorized("Unauthorized"))?;

        if req.name.trim().is_empty() {
            return Err(AppError::validation("Folder name cannot be empty"));
        }

        let folder = self
            .folders
            .create(&NewFolder::child(req.name, req.parent, ctx.user_id.as_str()))
            .await?;

        info!(
            folder_id = folder.id,
            parent = req.parent,
            user_id = %ctx.user_id,
            "Folder created"
        );

        Ok(folder)
    }

    /// Creates the initial tree for a new user: a root folder with the
    /// default children beneath it. Returns the root id.
    ///
    /// Calling this twice for the same user creates a second tree.
    pub async fn onboard_user(&self, user_id: &str) -> AppResult<FolderId> {
        if user_id.trim().is_empty() {
            return Err(AppError::validation("User id cannot be empty"));
        }

        let created = self
            .folders
            .create_with_children(&NewFolder::root(user_id), &DEFAULT_CHILD_FOLDERS)
            .await?;
        let root = created
            .first()
            .ok_or_else(|| AppError::internal("Onboarding created no root folder"))?;

        info!(user_id = %user_id, root_id = root.id, "User onboarded");

        Ok(root.id)
    }
}
