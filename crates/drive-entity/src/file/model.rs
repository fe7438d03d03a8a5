//! File entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::folder::FolderId;

/// A file record. Content lives in an external object store; the row only
/// keeps where to find it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct File {
    /// Unique file identifier.
    pub id: i64,
    /// File name (including extension).
    pub name: String,
    /// Size in bytes.
    pub size: i64,
    /// External storage location.
    pub url: String,
    /// Storage-provider key for the content.
    #[serde(rename = "UTkey")]
    pub ut_key: String,
    /// The folder containing this file.
    pub parent: FolderId,
    /// The owning user.
    pub owner_id: String,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
}

/// Data required to insert a file row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewFile {
    /// File name.
    pub name: String,
    /// Size in bytes.
    pub size: i64,
    /// External storage location.
    pub url: String,
    /// Storage-provider key.
    #[serde(rename = "UTkey")]
    pub ut_key: String,
    /// The folder to attach the file to.
    pub parent: FolderId,
    /// The owning user.
    pub owner_id: String,
}
