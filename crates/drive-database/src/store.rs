//! Storage traits for folder and file rows.
//!
//! The query and mutation services only ever talk to these traits. Two
//! implementations exist: the sqlx-backed repositories in
//! [`crate::repositories`] and the process-local [`crate::MemoryStore`].

use async_trait::async_trait;

use drive_core::result::AppResult;
use drive_entity::{File, Folder, FolderId, NewFile, NewFolder};

use crate::chain;

/// Row access for the `folders` table.
#[async_trait]
pub trait FolderStore: std::fmt::Debug + Send + Sync + 'static {
    /// Point lookup by primary key.
    async fn find_by_id(&self, id: FolderId) -> AppResult<Option<Folder>>;

    /// Direct children of `parent`, ascending by id.
    async fn find_children(&self, parent: FolderId) -> AppResult<Vec<Folder>>;

    /// Every folder owned by `owner_id` with no parent, ascending by id.
    async fn find_roots_for_owner(&self, owner_id: &str) -> AppResult<Vec<Folder>>;

    /// Insert one folder and return the stored row.
    async fn create(&self, data: &NewFolder) -> AppResult<Folder>;

    /// Insert `root` and then one child per name beneath it, all owned by
    /// `root.owner_id`. Returns the root followed by the children in
    /// insert order.
    async fn create_with_children(
        &self,
        root: &NewFolder,
        child_names: &[&str],
    ) -> AppResult<Vec<Folder>>;

    /// Total number of folder rows.
    async fn count(&self) -> AppResult<u64>;

    /// Ancestor chain of `id`, root first, ending with `id` itself.
    ///
    /// Walks `parent` links with one point lookup per level. Fails with
    /// `NotFound` when any link is missing and with `Conflict` when a
    /// folder repeats.
    async fn find_ancestors(&self, id: FolderId) -> AppResult<Vec<Folder>> {
        let mut walk = chain::AncestorWalk::new(id);
        while let Some(next) = walk.next_id()? {
            let folder = self.find_by_id(next).await?;
            walk.push(folder)?;
        }
        Ok(walk.finish())
    }

    /// All folders below `id` (excluding it), ordered by depth then id.
    async fn find_descendants(&self, id: FolderId) -> AppResult<Vec<Folder>> {
        let mut levels = chain::DescendantLevels::new(id);
        while let Some(parents) = levels.next_level() {
            let mut level = Vec::new();
            for parent in parents {
                level.extend(self.find_children(parent).await?);
            }
            levels.push_level(level);
        }
        Ok(levels.finish())
    }
}

/// Row access for the `files` table.
#[async_trait]
pub trait FileStore: std::fmt::Debug + Send + Sync + 'static {
    /// Files attached to `parent`, ascending by id.
    async fn find_by_folder(&self, parent: FolderId) -> AppResult<Vec<File>>;

    /// Files attached to any of `parents`, ascending by id.
    async fn find_by_folders(&self, parents: &[FolderId]) -> AppResult<Vec<File>> {
        let mut files = Vec::new();
        for parent in parents {
            files.extend(self.find_by_folder(*parent).await?);
        }
        files.sort_by_key(|f| f.id);
        Ok(files)
    }

    /// Insert one file and return the stored row.
    async fn create(&self, data: &NewFile) -> AppResult<File>;

    /// Total number of file rows.
    async fn count(&self) -> AppResult<u64>;
}
