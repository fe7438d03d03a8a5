//! Typed path parameter helpers.

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;

use drive_entity::FolderId;
use drive_service::BrowseService;

use crate::error::ApiError;

/// A folder id taken from the single path parameter of the route.
///
/// Anything that is not an integer is rejected with 400 "Invalid folder ID"
/// in the standard error body.
#[derive(Debug, Clone, Copy)]
pub struct FolderIdPath(pub FolderId);

impl<S: Send + Sync> FromRequestParts<S> for FolderIdPath {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| drive_core::AppError::validation("Invalid folder ID"))?;
        Ok(FolderIdPath(BrowseService::parse_folder_id(&raw)?))
    }
}
