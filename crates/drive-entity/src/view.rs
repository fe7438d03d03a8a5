//! Read-side views assembled from several folder/file queries.

use serde::{Deserialize, Serialize};

use crate::file::File;
use crate::folder::{Folder, FolderId};

/// Everything the folder page needs to render one folder.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FolderView {
    /// Direct child folders, ascending by id.
    pub folders: Vec<Folder>,
    /// Direct child files, ascending by id.
    pub files: Vec<File>,
    /// Ancestor chain, root first, ending with the current folder.
    pub parents: Vec<Folder>,
    /// The folder being displayed.
    pub current_folder_id: FolderId,
}

/// The folders below a folder, and the files in it or below it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FolderContents {
    /// Descendant folders, breadth-first.
    pub folders: Vec<Folder>,
    /// Files contained in the folder or any descendant, level by level,
    /// ascending id within a level.
    pub files: Vec<File>,
}
