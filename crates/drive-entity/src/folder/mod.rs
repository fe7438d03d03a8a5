//! Folder domain entities.

pub mod model;

pub use model::{DEFAULT_CHILD_FOLDERS, Folder, FolderId, NewFolder, ROOT_FOLDER_NAME};
