//! In-memory store using a Tokio lock for single-node deployments and tests.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use drive_core::result::AppResult;
use drive_entity::{File, Folder, FolderId, NewFile, NewFolder};

use crate::store::{FileStore, FolderStore};

/// Internal state for the memory store. Ids start at 1 and grow
/// monotonically, like a `BIGSERIAL` column.
#[derive(Debug, Default)]
struct InnerState {
    folders: BTreeMap<FolderId, Folder>,
    files: BTreeMap<i64, File>,
    last_folder_id: FolderId,
    last_file_id: i64,
}

impl InnerState {
    fn insert_folder(&mut self, data: &NewFolder) -> Folder {
        self.last_folder_id += 1;
        let folder = Folder {
            id: self.last_folder_id,
            name: data.name.clone(),
            parent: data.parent,
            owner_id: data.owner_id.clone(),
            created_at: Utc::now(),
        };
        self.folders.insert(folder.id, folder.clone());
        folder
    }
}

/// Process-local implementation of [`FolderStore`] and [`FileStore`].
///
/// Clones share the same underlying state. Contents are lost when the
/// process exits.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    state: Arc<RwLock<InnerState>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl FolderStore for MemoryStore {
    async fn find_by_id(&self, id: FolderId) -> AppResult<Option<Folder>> {
        Ok(self.state.read().await.folders.get(&id).cloned())
    }

    async fn find_children(&self, parent: FolderId) -> AppResult<Vec<Folder>> {
        let state = self.state.read().await;
        Ok(state
            .folders
            .values()
            .filter(|f| f.parent == Some(parent))
            .cloned()
            .collect())
    }

    async fn find_roots_for_owner(&self, owner_id: &str) -> AppResult<Vec<Folder>> {
        let state = self.state.read().await;
        Ok(state
            .folders
            .values()
            .filter(|f| f.owner_id == owner_id && f.parent.is_none())
            .cloned()
            .collect())
    }

    async fn create(&self, data: &NewFolder) -> AppResult<Folder> {
        Ok(self.state.write().await.insert_folder(data))
    }

    async fn create_with_children(
        &self,
        root: &NewFolder,
        child_names: &[&str],
    ) -> AppResult<Vec<Folder>> {
        let mut state = self.state.write().await;
        let root_row = state.insert_folder(root);
        let mut created = vec![root_row.clone()];
        for name in child_names {
            let child = NewFolder::child(*name, root_row.id, root_row.owner_id.clone());
            created.push(state.insert_folder(&child));
        }
        Ok(created)
    }

    async fn count(&self) -> AppResult<u64> {
        Ok(self.state.read().await.folders.len() as u64)
    }
}

#[async_trait]
impl FileStore for MemoryStore {
    async fn find_by_folder(&self, parent: FolderId) -> AppResult<Vec<File>> {
        let state = self.state.read().await;
        Ok(state
            .files
            .values()
            .filter(|f| f.parent == parent)
            .cloned()
            .collect())
    }

    async fn create(&self, data: &NewFile) -> AppResult<File> {
        let mut state = self.state.write().await;
        state.last_file_id += 1;
        let file = File {
            id: state.last_file_id,
            name: data.name.clone(),
            size: data.size,
            url: data.url.clone(),
            ut_key: data.ut_key.clone(),
            parent: data.parent,
            owner_id: data.owner_id.clone(),
            created_at: Utc::now(),
        };
        state.files.insert(file.id, file.clone());
        Ok(file)
    }

    async fn count(&self) -> AppResult<u64> {
        Ok(self.state.read().await.files.len() as u64)
    }
}

#[cfg(test)]
mod tests {
    use drive_core::error::ErrorKind;

    use super::*;

    fn new_file(name: &str, parent: FolderId) -> NewFile {
        NewFile {
            name: name.to_string(),
            size: 10,
            url: format!("https://x/{name}"),
            ut_key: format!("key-{name}"),
            parent,
            owner_id: "u1".to_string(),
        }
    }

    #[tokio::test]
    async fn test_ids_are_assigned_sequentially() {
        let store = MemoryStore::new();
        let a = FolderStore::create(&store, &NewFolder::root("u1")).await.unwrap();
        let b = FolderStore::create(&store, &NewFolder::child("b", a.id, "u1"))
            .await
            .unwrap();
        assert_eq!((a.id, b.id), (1, 2));
        assert_eq!(FolderStore::count(&store).await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_children_sorted_by_id() {
        let store = MemoryStore::new();
        let root = FolderStore::create(&store, &NewFolder::root("u1")).await.unwrap();
        for name in ["z", "a", "m"] {
            FolderStore::create(&store, &NewFolder::child(name, root.id, "u1"))
                .await
                .unwrap();
        }
        let ids: Vec<_> = store
            .find_children(root.id)
            .await
            .unwrap()
            .iter()
            .map(|f| f.id)
            .collect();
        assert_eq!(ids, vec![2, 3, 4]);
        assert!(store.find_children(999).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_with_children_links_to_root() {
        let store = MemoryStore::new();
        let created = store
            .create_with_children(&NewFolder::root("u1"), &["Trash", "Shared"])
            .await
            .unwrap();
        assert_eq!(created.len(), 3);
        assert!(created[0].is_root());
        assert!(created[1..].iter().all(|f| f.parent == Some(created[0].id)));
        assert!(created.iter().all(|f| f.owner_id == "u1"));
    }

    #[tokio::test]
    async fn test_default_ancestor_walk() {
        let store = MemoryStore::new();
        let root = FolderStore::create(&store, &NewFolder::root("u1")).await.unwrap();
        let mid = FolderStore::create(&store, &NewFolder::child("mid", root.id, "u1"))
            .await
            .unwrap();
        let leaf = FolderStore::create(&store, &NewFolder::child("leaf", mid.id, "u1"))
            .await
            .unwrap();

        let chain = store.find_ancestors(leaf.id).await.unwrap();
        assert_eq!(chain, vec![root, mid, leaf]);

        let err = store.find_ancestors(42).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn test_default_ancestor_walk_detects_cycle() {
        let store = MemoryStore::new();
        // Parents are not checked on insert, so a forward reference closes a loop.
        FolderStore::create(&store, &NewFolder::child("a", 2, "u1"))
            .await
            .unwrap();
        FolderStore::create(&store, &NewFolder::child("b", 1, "u1"))
            .await
            .unwrap();

        let err = store.find_ancestors(1).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Conflict);
    }

    #[tokio::test]
    async fn test_files_by_folders() {
        let store = MemoryStore::new();
        FileStore::create(&store, &new_file("a", 2)).await.unwrap();
        FileStore::create(&store, &new_file("b", 3)).await.unwrap();
        FileStore::create(&store, &new_file("c", 2)).await.unwrap();

        let names: Vec<_> = store
            .find_by_folders(&[3, 2])
            .await
            .unwrap()
            .into_iter()
            .map(|f| f.name)
            .collect();
        assert_eq!(names, vec!["a", "b", "c"]);
        assert_eq!(FileStore::count(&store).await.unwrap(), 3);
    }
}
