//! Folder repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;

use drive_core::error::{AppError, ErrorKind};
use drive_core::result::AppResult;
use drive_entity::{Folder, FolderId, NewFolder};

use crate::chain;
use crate::store::FolderStore;

const FOLDER_COLUMNS: &str = "id, name, parent, owner_id, created_at";

/// PostgreSQL-backed folder store.
#[derive(Debug, Clone)]
pub struct FolderRepository {
    pool: PgPool,
}

impl FolderRepository {
    /// Create a new folder repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FolderStore for FolderRepository {
    async fn find_by_id(&self, id: FolderId) -> AppResult<Option<Folder>> {
        sqlx::query_as::<_, Folder>(&format!("SELECT {FOLDER_COLUMNS} FROM folders WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find folder", e))
    }

    async fn find_children(&self, parent: FolderId) -> AppResult<Vec<Folder>> {
        sqlx::query_as::<_, Folder>(&format!(
            "SELECT {FOLDER_COLUMNS} FROM folders WHERE parent = $1 ORDER BY id ASC"
        ))
        .bind(parent)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list child folders", e))
    }

    async fn find_roots_for_owner(&self, owner_id: &str) -> AppResult<Vec<Folder>> {
        sqlx::query_as::<_, Folder>(&format!(
            "SELECT {FOLDER_COLUMNS} FROM folders \
             WHERE owner_id = $1 AND parent IS NULL ORDER BY id ASC"
        ))
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find root folders", e))
    }

    async fn create(&self, data: &NewFolder) -> AppResult<Folder> {
        sqlx::query_as::<_, Folder>(&format!(
            "INSERT INTO folders (name, parent, owner_id) VALUES ($1, $2, $3) \
             RETURNING {FOLDER_COLUMNS}"
        ))
        .bind(&data.name)
        .bind(data.parent)
        .bind(&data.owner_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create folder", e))
    }

    async fn create_with_children(
        &self,
        root: &NewFolder,
        child_names: &[&str],
    ) -> AppResult<Vec<Folder>> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        let root_row = sqlx::query_as::<_, Folder>(&format!(
            "INSERT INTO folders (name, parent, owner_id) VALUES ($1, $2, $3) \
             RETURNING {FOLDER_COLUMNS}"
        ))
        .bind(&root.name)
        .bind(root.parent)
        .bind(&root.owner_id)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create root folder", e))?;

        let mut created = Vec::with_capacity(child_names.len() + 1);
        for name in child_names {
            let child = sqlx::query_as::<_, Folder>(&format!(
                "INSERT INTO folders (name, parent, owner_id) VALUES ($1, $2, $3) \
                 RETURNING {FOLDER_COLUMNS}"
            ))
            .bind(*name)
            .bind(root_row.id)
            .bind(&root_row.owner_id)
            .fetch_one(&mut *tx)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to create child folder", e)
            })?;
            created.push(child);
        }

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit folder tree", e)
        })?;

        created.insert(0, root_row);
        Ok(created)
    }

    async fn count(&self) -> AppResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM folders")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count folders", e))?;
        Ok(count as u64)
    }

    /// One recursive query instead of a lookup per level. The `visited`
    /// array stops the recursion on a parent cycle; the rows are then
    /// ordered and checked by [`chain::assemble_ancestors`].
    async fn find_ancestors(&self, id: FolderId) -> AppResult<Vec<Folder>> {
        let rows = sqlx::query_as::<_, Folder>(
            "WITH RECURSIVE ancestors AS ( \
                SELECT f.id, f.name, f.parent, f.owner_id, f.created_at, ARRAY[f.id] AS visited \
                FROM folders f WHERE f.id = $1 \
                UNION ALL \
                SELECT p.id, p.name, p.parent, p.owner_id, p.created_at, a.visited || p.id \
                FROM folders p INNER JOIN ancestors a ON p.id = a.parent \
                WHERE NOT p.id = ANY(a.visited) \
             ) SELECT id, name, parent, owner_id, created_at FROM ancestors",
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find ancestors", e))?;

        chain::assemble_ancestors(id, rows)
    }

    async fn find_descendants(&self, id: FolderId) -> AppResult<Vec<Folder>> {
        sqlx::query_as::<_, Folder>(
            "WITH RECURSIVE tree AS ( \
                SELECT f.id, f.name, f.parent, f.owner_id, f.created_at, \
                       0 AS depth, ARRAY[f.id] AS visited \
                FROM folders f WHERE f.id = $1 \
                UNION ALL \
                SELECT c.id, c.name, c.parent, c.owner_id, c.created_at, \
                       t.depth + 1, t.visited || c.id \
                FROM folders c INNER JOIN tree t ON c.parent = t.id \
                WHERE NOT c.id = ANY(t.visited) \
             ) SELECT id, name, parent, owner_id, created_at \
               FROM tree WHERE id != $1 ORDER BY depth ASC, id ASC",
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list descendants", e))
    }
}
