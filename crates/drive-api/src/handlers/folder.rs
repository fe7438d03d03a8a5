//! Folder lookup, listing, and creation handlers.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use drive_core::error::AppError;
use drive_entity::{File, Folder, FolderContents};

use crate::dto::request::CreateFolderRequest;
use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::extractors::{FolderIdPath, MaybeAuthUser, ValidatedJson};
use crate::state::AppState;

/// GET /api/folders/{id}
pub async fn get_folder(
    State(state): State<AppState>,
    FolderIdPath(id): FolderIdPath,
) -> Result<Json<ApiResponse<Folder>>, ApiError> {
    let folder = state
        .queries
        .get_folder(id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Folder {id} not found")))?;
    Ok(Json(ApiResponse::ok(folder)))
}

/// GET /api/folders/{id}/children
pub async fn list_children(
    State(state): State<AppState>,
    FolderIdPath(id): FolderIdPath,
) -> Result<Json<ApiResponse<Vec<Folder>>>, ApiError> {
    let children = state.queries.list_child_folders(id).await?;
    Ok(Json(ApiResponse::ok(children)))
}

/// GET /api/folders/{id}/files
pub async fn list_files(
    State(state): State<AppState>,
    FolderIdPath(id): FolderIdPath,
) -> Result<Json<ApiResponse<Vec<File>>>, ApiError> {
    let files = state.queries.list_child_files(id).await?;
    Ok(Json(ApiResponse::ok(files)))
}

/// GET /api/folders/{id}/parents
pub async fn list_parents(
    State(state): State<AppState>,
    FolderIdPath(id): FolderIdPath,
) -> Result<Json<ApiResponse<Vec<Folder>>>, ApiError> {
    let chain = state.queries.resolve_ancestor_chain(id).await?;
    Ok(Json(ApiResponse::ok(chain)))
}

/// GET /api/folders/{id}/subtree
pub async fn get_subtree(
    State(state): State<AppState>,
    FolderIdPath(id): FolderIdPath,
) -> Result<Json<ApiResponse<FolderContents>>, ApiError> {
    let contents = state.queries.collect_subtree(id).await?;
    Ok(Json(ApiResponse::ok(contents)))
}

/// POST /api/folders
pub async fn create_folder(
    State(state): State<AppState>,
    auth: MaybeAuthUser,
    ValidatedJson(req): ValidatedJson<CreateFolderRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Folder>>), ApiError> {
    let folder = state
        .mutations
        .create_folder(auth.context(), req.into())
        .await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(folder))))
}
