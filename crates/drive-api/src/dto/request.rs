//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use validator::Validate;

use drive_core::error::AppError;
use drive_core::result::AppResult;
use drive_entity::FolderId;
use drive_service::{CreateFolderRequest as SvcCreateFolder, DEFAULT_FOLDER_NAME, NewFileRequest};

/// Create folder request body. `name` falls back to "New Folder".
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateFolderRequest {
    /// Folder name.
    #[validate(length(max = 255, message = "Folder name is too long"))]
    pub name: Option<String>,
    /// Parent folder ID.
    pub parent: FolderId,
}

impl From<CreateFolderRequest> for SvcCreateFolder {
    fn from(req: CreateFolderRequest) -> Self {
        Self {
            name: req.name.unwrap_or_else(|| DEFAULT_FOLDER_NAME.to_string()),
            parent: req.parent,
        }
    }
}

/// Create file record request body, as posted by the upload callback.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateFileRequest {
    /// File name.
    #[validate(length(min = 1, max = 255, message = "File name is required"))]
    pub name: String,
    /// Size in bytes.
    #[validate(range(min = 0, message = "Size cannot be negative"))]
    pub size: i64,
    /// External storage location.
    #[validate(url(message = "Invalid file URL"))]
    pub url: String,
    /// Storage-provider key.
    #[serde(rename = "UTkey")]
    #[validate(length(min = 1, message = "UTkey is required"))]
    pub ut_key: String,
    /// Target folder ID.
    pub parent: FolderId,
}

impl From<CreateFileRequest> for NewFileRequest {
    fn from(req: CreateFileRequest) -> Self {
        Self {
            name: req.name,
            size: req.size,
            url: req.url,
            ut_key: req.ut_key,
            parent: req.parent,
        }
    }
}

/// Runs `validator` rules and maps failures to a validation error.
pub fn validate_body<T: Validate>(body: &T) -> AppResult<()> {
    body.validate()
        .map_err(|e| AppError::validation(format!("Invalid request: {e}")))
}
