//! Store manager that dispatches to the configured provider.

use std::sync::Arc;

use tracing::info;

use drive_core::config::{DatabaseConfig, DatabaseProvider};
use drive_core::result::AppResult;

use crate::connection::DatabasePool;
use crate::memory::MemoryStore;
use crate::repositories::{FileRepository, FolderRepository};
use crate::store::{FileStore, FolderStore};

/// Folder and file stores selected at construction time from configuration.
#[derive(Debug, Clone)]
pub struct StoreManager {
    folders: Arc<dyn FolderStore>,
    files: Arc<dyn FileStore>,
    /// Present only for the PostgreSQL provider.
    pool: Option<DatabasePool>,
}

impl StoreManager {
    /// Create the stores for the configured provider, running migrations
    /// first when `auto_migrate` is set.
    pub async fn connect(config: &DatabaseConfig) -> AppResult<Self> {
        match config.provider {
            DatabaseProvider::Postgres => {
                info!("Initializing PostgreSQL store");
                Ok(Self::postgres(DatabasePool::open(config).await?))
            }
            DatabaseProvider::Memory => {
                info!("Initializing in-memory store");
                Ok(Self::memory(MemoryStore::new()))
            }
        }
    }

    /// Stores backed by an existing PostgreSQL pool.
    pub fn postgres(pool: DatabasePool) -> Self {
        Self {
            folders: Arc::new(FolderRepository::new(pool.pool().clone())),
            files: Arc::new(FileRepository::new(pool.pool().clone())),
            pool: Some(pool),
        }
    }

    /// Stores backed by a shared in-memory store.
    pub fn memory(store: MemoryStore) -> Self {
        Self {
            folders: Arc::new(store.clone()),
            files: Arc::new(store),
            pool: None,
        }
    }

    /// The folder store.
    pub fn folders(&self) -> Arc<dyn FolderStore> {
        Arc::clone(&self.folders)
    }

    /// The file store.
    pub fn files(&self) -> Arc<dyn FileStore> {
        Arc::clone(&self.files)
    }

    /// Check store connectivity. Always healthy for the memory provider.
    pub async fn health_check(&self) -> AppResult<bool> {
        match &self.pool {
            Some(pool) => pool.health_check().await,
            None => Ok(true),
        }
    }

    /// Release pooled connections, if any.
    pub async fn close(&self) {
        if let Some(pool) = &self.pool {
            pool.close().await;
        }
    }
}
