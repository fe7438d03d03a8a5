//! # drive-service
//!
//! Business logic for Drive. The services here sit between the HTTP
//! handlers and the store traits of `drive-database`:
//!
//! - [`DriveQueries`]: read-side tree access
//! - [`DriveMutations`]: folder/file creation and user onboarding
//! - [`BrowseService`]: the folder page, assembled from several queries

pub mod browse;
pub mod context;
pub mod mutations;
pub mod queries;

pub use browse::BrowseService;
pub use context::RequestContext;
pub use mutations::{CreateFolderRequest, DEFAULT_FOLDER_NAME, DriveMutations, NewFileRequest};
pub use queries::DriveQueries;
