//! The folder page: one folder's contents plus its breadcrumb trail.

use tracing::debug;

use drive_core::error::AppError;
use drive_core::result::AppResult;
use drive_entity::{FolderId, FolderView};

use crate::queries::DriveQueries;

/// Assembles [`FolderView`]s from [`DriveQueries`].
#[derive(Debug, Clone)]
pub struct BrowseService {
    queries: DriveQueries,
}

impl BrowseService {
    /// Creates a new browse service.
    pub fn new(queries: DriveQueries) -> Self {
        Self { queries }
    }

    /// Parses a folder id taken from a URL segment.
    pub fn parse_folder_id(raw: &str) -> AppResult<FolderId> {
        raw.trim()
            .parse::<FolderId>()
            .map_err(|_| AppError::validation("Invalid folder ID"))
    }

    /// Loads child folders, child files, and the ancestor chain of
    /// `folder_id` concurrently. Any failing read fails the whole page.
    pub async fn open_folder(&self, folder_id: FolderId) -> AppResult<FolderView> {
        let (folders, files, parents) = tokio::try_join!(
            self.queries.list_child_folders(folder_id),
            self.queries.list_child_files(folder_id),
            self.queries.resolve_ancestor_chain(folder_id),
        )?;

        debug!(
            folder_id,
            folders = folders.len(),
            files = files.len(),
            "Opened folder"
        );

        Ok(FolderView {
            folders,
            files,
            parents,
            current_folder_id: folder_id,
        })
    }

    /// Parses `raw` and opens the folder it names.
    pub async fn open_folder_raw(&self, raw: &str) -> AppResult<FolderView> {
        let folder_id = Self::parse_folder_id(raw)?;
        self.open_folder(folder_id).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use drive_core::error::ErrorKind;
    use drive_database::MemoryStore;
    use drive_database::store::FolderStore;
    use drive_entity::NewFolder;

    use super::*;

    fn browse(store: &MemoryStore) -> BrowseService {
        BrowseService::new(DriveQueries::new(
            Arc::new(store.clone()),
            Arc::new(store.clone()),
        ))
    }

    #[test]
    fn test_parse_folder_id() {
        assert_eq!(BrowseService::parse_folder_id("42").unwrap(), 42);
        for raw in ["abc", "", "4.2", "99999999999999999999"] {
            let err = BrowseService::parse_folder_id(raw).unwrap_err();
            assert_eq!(err.kind, ErrorKind::Validation);
            assert_eq!(err.message, "Invalid folder ID");
        }
    }

    #[tokio::test]
    async fn test_open_folder_collects_all_three_reads() {
        let store = MemoryStore::new();
        let created = store
            .create_with_children(&NewFolder::root("u1"), &["Trash", "Documents"])
            .await
            .unwrap();
        let docs = &created[2];

        let view = browse(&store).open_folder(docs.id).await.unwrap();
        assert_eq!(view.current_folder_id, docs.id);
        assert!(view.folders.is_empty());
        assert!(view.files.is_empty());
        let names: Vec<_> = view.parents.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["Root", "Documents"]);

        let root_view = browse(&store).open_folder(created[0].id).await.unwrap();
        assert_eq!(root_view.folders.len(), 2);
        assert_eq!(root_view.parents, vec![created[0].clone()]);
    }

    #[tokio::test]
    async fn test_open_missing_folder_fails() {
        let store = MemoryStore::new();
        let err = browse(&store).open_folder(12).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn test_open_folder_raw_rejects_before_store_access() {
        let store = MemoryStore::new();
        let err = browse(&store).open_folder_raw("abc").await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
    }
}
