//! Read-side access to the folder tree.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, warn};

use drive_core::result::AppResult;
use drive_database::store::{FileStore, FolderStore};
use drive_entity::{File, Folder, FolderContents, FolderId};

/// Folder and file lookups. None of these check ownership; only the root
/// lookup filters by owner.
#[derive(Debug, Clone)]
pub struct DriveQueries {
    /// Folder store.
    folders: Arc<dyn FolderStore>,
    /// File store.
    files: Arc<dyn FileStore>,
}

impl DriveQueries {
    /// Creates a new query service.
    pub fn new(folders: Arc<dyn FolderStore>, files: Arc<dyn FileStore>) -> Self {
        Self { folders, files }
    }

    /// Direct child folders of `folder_id`, ascending by id. A folder that
    /// does not exist simply has no children.
    pub async fn list_child_folders(&self, folder_id: FolderId) -> AppResult<Vec<Folder>> {
        self.folders.find_children(folder_id).await
    }

    /// Files directly inside `folder_id`, ascending by id.
    pub async fn list_child_files(&self, folder_id: FolderId) -> AppResult<Vec<File>> {
        self.files.find_by_folder(folder_id).await
    }

    /// The chain of folders from the root down to `folder_id` inclusive.
    ///
    /// Fails with `NotFound` ("Parent folder not found") when `folder_id` or
    /// any ancestor is missing, and with `Conflict` when the parent links
    /// loop.
    pub async fn resolve_ancestor_chain(&self, folder_id: FolderId) -> AppResult<Vec<Folder>> {
        let chain = self.folders.find_ancestors(folder_id).await?;
        debug!(folder_id, depth = chain.len(), "Resolved ancestor chain");
        Ok(chain)
    }

    /// A single folder by id.
    pub async fn get_folder(&self, folder_id: FolderId) -> AppResult<Option<Folder>> {
        self.folders.find_by_id(folder_id).await
    }

    /// The root folder owned by `user_id`.
    ///
    /// Returns `None` for a user who was never onboarded, and also when more
    /// than one root exists.
    pub async fn get_root_folder_for_user(&self, user_id: &str) -> AppResult<Option<Folder>> {
        let mut roots = self.folders.find_roots_for_owner(user_id).await?;
        match roots.len() {
            0 => Ok(None),
            1 => Ok(roots.pop()),
            count => {
                warn!(user_id, count, "User has more than one root folder");
                Ok(None)
            }
        }
    }

    /// Every folder below `folder_id` and every file in it or below it.
    ///
    /// Files follow the folder levels: those directly in `folder_id` first,
    /// then each deeper level, ascending id within a level.
    pub async fn collect_subtree(&self, folder_id: FolderId) -> AppResult<FolderContents> {
        let folders = self.folders.find_descendants(folder_id).await?;

        let mut depth: HashMap<FolderId, usize> = HashMap::with_capacity(folders.len() + 1);
        depth.insert(folder_id, 0);
        for f in &folders {
            let level = f.parent.and_then(|p| depth.get(&p).copied()).unwrap_or(0) + 1;
            depth.insert(f.id, level);
        }

        let parents: Vec<FolderId> = depth.keys().copied().collect();
        let mut files = self.files.find_by_folders(&parents).await?;
        files.sort_by_key(|f| (depth.get(&f.parent).copied().unwrap_or(usize::MAX), f.id));

        debug!(
            folder_id,
            folders = folders.len(),
            files = files.len(),
            "Collected subtree"
        );
        Ok(FolderContents { folders, files })
    }
}
