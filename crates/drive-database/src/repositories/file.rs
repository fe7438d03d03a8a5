//! File repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;

use drive_core::error::{AppError, ErrorKind};
use drive_core::result::AppResult;
use drive_entity::{File, FolderId, NewFile};

use crate::store::FileStore;

const FILE_COLUMNS: &str = "id, name, size, url, ut_key, parent, owner_id, created_at";

/// PostgreSQL-backed file store.
#[derive(Debug, Clone)]
pub struct FileRepository {
    pool: PgPool,
}

impl FileRepository {
    /// Create a new file repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FileStore for FileRepository {
    async fn find_by_folder(&self, parent: FolderId) -> AppResult<Vec<File>> {
        sqlx::query_as::<_, File>(&format!(
            "SELECT {FILE_COLUMNS} FROM files WHERE parent = $1 ORDER BY id ASC"
        ))
        .bind(parent)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list files", e))
    }

    async fn find_by_folders(&self, parents: &[FolderId]) -> AppResult<Vec<File>> {
        sqlx::query_as::<_, File>(&format!(
            "SELECT {FILE_COLUMNS} FROM files WHERE parent = ANY($1) ORDER BY id ASC"
        ))
        .bind(parents)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list files", e))
    }

    async fn create(&self, data: &NewFile) -> AppResult<File> {
        sqlx::query_as::<_, File>(&format!(
            "INSERT INTO files (name, size, url, ut_key, parent, owner_id) \
             VALUES ($1, $2, $3, $4, $5, $6) RETURNING {FILE_COLUMNS}"
        ))
        .bind(&data.name)
        .bind(data.size)
        .bind(&data.url)
        .bind(&data.ut_key)
        .bind(data.parent)
        .bind(&data.owner_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create file", e))
    }

    async fn count(&self) -> AppResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM files")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count files", e))?;
        Ok(count as u64)
    }
}
