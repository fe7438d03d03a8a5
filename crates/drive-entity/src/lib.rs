//! # drive-entity
//!
//! Domain entity models for Drive. Every struct in this crate represents
//! a database table row, an insert payload, or a read-side view assembled
//! from several rows. Table rows additionally derive `sqlx::FromRow`.

pub mod file;
pub mod folder;
pub mod view;

pub use file::{File, NewFile};
pub use folder::{DEFAULT_CHILD_FOLDERS, Folder, FolderId, NewFolder, ROOT_FOLDER_NAME};
pub use view::{FolderContents, FolderView};
