//! Folder entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Store-assigned folder identifier.
pub type FolderId = i64;

/// Name of the root folder created when a user is onboarded.
pub const ROOT_FOLDER_NAME: &str = "Root";

/// Children seeded under a freshly onboarded root, in insert order.
pub const DEFAULT_CHILD_FOLDERS: [&str; 3] = ["Trash", "Shared", "Documents"];

/// A folder in the drive tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Folder {
    /// Unique folder identifier.
    pub id: FolderId,
    /// Display name.
    pub name: String,
    /// Parent folder ID (null for root folders).
    pub parent: Option<FolderId>,
    /// Identifier of the owning user in the external identity system.
    pub owner_id: String,
    /// When the folder was created.
    pub created_at: DateTime<Utc>,
}

impl Folder {
    /// Check if this is a root folder (no parent).
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

/// Data required to insert a folder row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewFolder {
    /// Display name.
    pub name: String,
    /// Parent folder (None for a root).
    pub parent: Option<FolderId>,
    /// The owning user.
    pub owner_id: String,
}

impl NewFolder {
    /// A root folder for `owner_id`.
    pub fn root(owner_id: impl Into<String>) -> Self {
        Self {
            name: ROOT_FOLDER_NAME.to_string(),
            parent: None,
            owner_id: owner_id.into(),
        }
    }

    /// A folder placed under `parent`.
    pub fn child(name: impl Into<String>, parent: FolderId, owner_id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parent: Some(parent),
            owner_id: owner_id.into(),
        }
    }
}
