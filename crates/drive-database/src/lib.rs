//! # drive-database
//!
//! Storage boundary for Drive: the [`FolderStore`] / [`FileStore`] traits,
//! their PostgreSQL implementations, an in-memory implementation, and
//! connection management with embedded migrations.

pub mod chain;
pub mod connection;
pub mod memory;
pub mod provider;
pub mod repositories;
pub mod store;

pub use connection::DatabasePool;
pub use memory::MemoryStore;
pub use provider::StoreManager;
pub use store::{FileStore, FolderStore};
